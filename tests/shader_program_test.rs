use approx::assert_relative_eq;
use cgmath::{Matrix4, Vector3, Vector4};
use still_life::{
    pipelines::light::LightSource,
    shader::{
        LightField, LightsUniform, MaterialField, ObjectUniform, ShaderProgram, ShaderUniforms,
        Uniform, UniformValue,
    },
};

#[test]
fn should_spell_uniform_wire_names() {
    assert_eq!(Uniform::Model.to_string(), "model");
    assert_eq!(Uniform::ObjectColor.to_string(), "objectColor");
    assert_eq!(Uniform::ObjectTexture.to_string(), "objectTexture");
    assert_eq!(Uniform::UseTexture.to_string(), "bUseTexture");
    assert_eq!(Uniform::UseLighting.to_string(), "bUseLighting");
    assert_eq!(Uniform::UvScale.to_string(), "UVscale");
    assert_eq!(
        Uniform::Material(MaterialField::AmbientStrength).to_string(),
        "material.ambientStrength"
    );
    assert_eq!(
        Uniform::Light(3, LightField::FocalStrength).to_string(),
        "lightSources[3].focalStrength"
    );
}

#[test]
fn should_name_every_material_field_under_material() {
    let names: Vec<String> = MaterialField::ALL
        .iter()
        .map(|&field| Uniform::Material(field).to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "material.ambientColor",
            "material.ambientStrength",
            "material.diffuseColor",
            "material.specularColor",
            "material.shininess"
        ]
    );
}

#[test]
fn should_match_wgsl_uniform_block_sizes() {
    assert_eq!(std::mem::size_of::<ObjectUniform>(), 192);
    assert_eq!(std::mem::size_of::<LightsUniform>(), 5 * 64);
}

#[test]
fn should_store_object_uniforms() {
    let mut program = ShaderProgram::new();

    program.set_vec4(Uniform::ObjectColor, Vector4::new(0.5, 0.25, 1.0, 1.0));
    program.set_bool(Uniform::UseTexture, true);
    program.set_sampler(Uniform::ObjectTexture, 7);
    program.set_vec2(Uniform::UvScale, (2.0, 3.0).into());
    program.set_float(Uniform::Material(MaterialField::Shininess), 64.0);
    program.set_vec3(
        Uniform::Material(MaterialField::DiffuseColor),
        Vector3::new(0.1, 0.2, 0.3),
    );

    let object = program.object;
    assert_eq!(object.object_color, [0.5, 0.25, 1.0, 1.0]);
    assert_eq!(object.use_texture, 1);
    assert_eq!(object.texture_slot, 7);
    assert_eq!(object.uv_scale, [2.0, 3.0]);
    assert_eq!(object.shininess, 64.0);
    assert_eq!(object.diffuse_color, [0.1, 0.2, 0.3]);
}

#[test]
fn should_compute_normal_matrix_from_model() {
    let mut program = ShaderProgram::new();

    program.set_mat4(Uniform::Model, Matrix4::from_nonuniform_scale(2.0, 4.0, 1.0));

    let normal = program.object.normal;
    assert_relative_eq!(normal[0][0], 0.5);
    assert_relative_eq!(normal[1][1], 0.25);
    assert_relative_eq!(normal[2][2], 1.0);
}

#[test]
fn should_ignore_mismatched_values() {
    let mut program = ShaderProgram::new();
    let before = program.object;

    program.set_uniform(Uniform::ObjectColor, UniformValue::Float(1.0));
    program.set_uniform(Uniform::Light(9, LightField::Position), UniformValue::Vec3([1.0; 3]));

    assert_eq!(program.object, before);
    assert!(!program.take_lights_dirty());
}

#[test]
fn should_mark_lights_dirty_once() {
    let mut program = ShaderProgram::new();
    let light = LightSource {
        position: Vector3::new(3.0, 14.0, 0.0),
        ambient_color: Vector3::new(0.01, 0.01, 0.01),
        diffuse_color: Vector3::new(0.8, 0.8, 0.8),
        specular_color: Vector3::new(0.8, 0.8, 0.8),
        focal_strength: 64.0,
        specular_intensity: 1.0,
    };

    light.apply(2, &mut program);

    assert!(program.take_lights_dirty());
    assert!(!program.take_lights_dirty());
    let stored = program.lights.lights[2];
    assert_eq!(stored.position, [3.0, 14.0, 0.0]);
    assert_eq!(stored.focal_strength, 64.0);
    assert_eq!(stored.specular_intensity, 1.0);
    assert_eq!(program.lights.lights[0], Default::default());
}
