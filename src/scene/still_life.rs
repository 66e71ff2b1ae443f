//! The still life: materials, lights and the object table.

use cgmath::Vector3;

use crate::{
    data_structures::{material::Material, mesh::MeshKind, transform::Transform},
    pipelines::light::LightSource,
    scene::SceneObject,
    shader::MAX_LIGHTS,
};

const STEEL_GREY: [f32; 4] = [0.439, 0.502, 0.565, 1.0];
const DIM_GREY: [f32; 4] = [0.412, 0.412, 0.412, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("steel", [0.1, 0.1, 0.1], 0.2, [0.2, 0.2, 0.2], [0.6, 0.6, 0.6], 128.0),
        Material::new("ceramic", [0.2, 0.2, 0.2], 0.4, [0.8, 0.8, 0.8], [0.4, 0.4, 0.4], 32.0),
        Material::new("wood", [0.4, 0.3, 0.1], 0.2, [0.3, 0.2, 0.1], [0.1, 0.1, 0.1], 0.3),
        Material::new("plastic", [0.1, 0.1, 0.1], 0.2, [0.6, 0.6, 0.6], [0.8, 0.8, 0.8], 64.0),
        Material::new("glass", [0.4, 0.4, 0.4], 0.3, [0.3, 0.3, 0.3], [0.6, 0.6, 0.6], 85.0),
        Material::new("bagel", [0.2, 0.2, 0.2], 0.3, [0.4, 0.4, 0.5], [0.2, 0.2, 0.4], 0.5),
        Material::new("paper", [0.2, 0.2, 0.2], 0.4, [0.6, 0.6, 0.6], [0.2, 0.2, 0.2], 40.0),
        Material::new("wax", [0.2, 0.2, 0.2], 0.4, [0.8, 0.8, 0.6], [0.6, 0.6, 0.4], 32.0),
        Material::new("candleFlame", [0.0, 0.0, 0.0], 0.0, [1.0, 0.8, 0.4], [0.0, 0.0, 0.0], 0.0),
    ]
}

fn light(
    position: [f32; 3],
    ambient: f32,
    diffuse: f32,
    specular: f32,
    focal_strength: f32,
    specular_intensity: f32,
) -> LightSource {
    LightSource {
        position: position.into(),
        ambient_color: Vector3::new(ambient, ambient, ambient),
        diffuse_color: Vector3::new(diffuse, diffuse, diffuse),
        specular_color: Vector3::new(specular, specular, specular),
        focal_strength,
        specular_intensity,
    }
}

/// Key, fill, back and two rim lights.
pub fn lights() -> [LightSource; MAX_LIGHTS] {
    let rim = light([0.6, 5.0, 6.0], 0.01, 0.4, 0.4, 16.0, 0.3);
    [
        light([3.0, 14.0, 0.0], 0.01, 0.8, 0.8, 64.0, 1.0),
        light([3.0, 14.0, -3.0], 0.02, 0.8, 0.2, 16.0, 0.05),
        rim,
        rim,
        rim,
    ]
}

#[allow(clippy::too_many_arguments)]
fn object(
    name: &str,
    scale: [f32; 3],
    rotation: [f32; 3],
    position: [f32; 3],
    color: [f32; 4],
    texture: &str,
    material: Option<&str>,
    mesh: MeshKind,
) -> SceneObject {
    SceneObject {
        name: name.to_string(),
        transform: Transform {
            scale: scale.into(),
            rotation: rotation.into(),
            position: position.into(),
        },
        color,
        texture: Some(texture.to_string()),
        uv_scale: None,
        material: material.map(str::to_string),
        mesh,
    }
}

/// Objects in draw order.
pub fn objects() -> Vec<SceneObject> {
    use MeshKind::{Cylinder, Plane, Torus};

    let lid_rotation = [90.0, -10.0, 100.0];
    vec![
        object("table", [20.0, 1.0, 10.0], [0.0; 3], [0.0; 3], WHITE, "Table", Some("wood"), Plane),
        object("jar", [2.0, 3.95, 1.5], [0.0, 0.0, 180.0], [3.0, 4.0, 0.0], STEEL_GREY, "Metal_S", Some("steel"), Cylinder),
        object("jar lid", [1.8, 1.5, 1.7], lid_rotation, [4.0, 5.2, 0.0], [0.184, 0.310, 0.310, 1.0], "Metal_S", Some("steel"), Cylinder),
        object("lid seal", [1.9, 0.3, 1.75], lid_rotation, [3.5, 5.35, -0.1], [0.753, 0.753, 0.753, 1.0], "Plastic_P", Some("plastic"), Cylinder),
        // inherits the seal's plastic
        object("lid handle", [0.5, 0.8, 0.5], lid_rotation, [2.7, 5.35, 0.0], DIM_GREY, "Metal_T", None, Cylinder),
        object("napkin", [2.0, 1.5, 1.0], [0.0, 30.0, 0.0], [4.0, 0.08, 3.5], WHITE, "Paper", Some("paper"), Plane),
        object("bagel", [0.9, 1.0, 1.5], [90.0, 0.0, 0.0], [3.8, 0.35, 3.5], [1.0, 0.647, 0.0, 1.0], "Bagel_B", Some("bagel"), Torus),
        object("candle", [1.0, 3.95, 1.0], [0.0, 0.0, 180.0], [-1.0, 4.0, 0.0], STEEL_GREY, "Candle_C", Some("wax"), Cylinder),
        object("candle flame", [0.2, 0.5, 1.5], [90.0, 0.0, 100.0], [-0.8, 4.0, 0.0], DIM_GREY, "Candle_L", Some("candleFlame"), Cylinder),
        object("mug", [2.0, 2.45, 1.5], [0.0, 0.0, 180.0], [-5.0, 2.5, 0.0], STEEL_GREY, "Mug_M", Some("ceramic"), Cylinder),
        object("water bottle", [0.9, 3.7, 0.8], [0.0, 0.0, -145.0], [-6.3, 3.9, 0.0], STEEL_GREY, "Lblue_B", Some("plastic"), Cylinder),
        object("bottle lid", [0.4, 0.7, 0.4], [0.0, 0.0, -145.0], [-6.6, 4.3, 0.0], STEEL_GREY, "White_Lid", Some("plastic"), Cylinder),
    ]
}
