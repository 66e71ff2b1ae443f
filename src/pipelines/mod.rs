/**
 * Render pipelines and the uniform resources they bind.
 */
pub mod basic;
pub mod light;
