use blue_marble::matrices::{
    self, ModelViewProjectionParams, composition_demo, model_view_projection_demo,
    rotation_demo, scale_demo, translation_demo,
};
use glam::{Vec3, Vec4};

fn main() {
    env_logger::init();

    let reports: [matrices::Report; 5] = [
        translation_demo(
            Vec3::splat(10.0),
            Vec4::new(10.0, 10.0, 10.0, 1.0),
            Vec4::new(10.0, 10.0, 10.0, 0.0),
        ),
        rotation_demo(
            Vec3::Z,
            90.0,
            Vec4::new(100.0, 0.0, 0.0, 1.0),
            Vec4::new(100.0, 0.0, 0.0, 0.0),
        ),
        scale_demo(
            Vec3::splat(2.0),
            Vec4::new(100.0, 100.0, 0.0, 1.0),
            Vec4::new(100.0, 100.0, 0.0, 0.0),
        ),
        composition_demo(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::Z,
            45.0,
            Vec3::new(2.0, 2.0, 0.0),
            Vec4::new(1.0, 1.0, 0.0, 1.0),
            Vec4::new(1.0, 1.0, 0.0, 0.0),
        ),
        model_view_projection_demo(&ModelViewProjectionParams::default()),
    ];

    for report in &reports {
        log::debug!("printing {}", report.title);
        print!("{report}");
    }
}
