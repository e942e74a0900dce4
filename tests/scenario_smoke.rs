use dragbox_engine::simulation::{DRAW_COMMAND_WORDS, DRAW_KIND_RECT};
use dragbox_engine::{SceneBundle, SimulationCore, Surface, Vec2};

const SCENE: &str = r##"{
    "formatVersion": 1,
    "settings": { "friction": 0.98, "wallSpin": 6.0, "floorFriction": 0.9 },
    "bodies": [
        { "shape": { "kind": "disk", "radius": 20 }, "x": 100, "y": 100, "color": "#ff0000" },
        { "shape": { "kind": "disk", "radius": 25 }, "x": 200, "y": 150, "color": "#0000ff" },
        { "shape": { "kind": "sprite", "width": 60, "height": 40 }, "x": 300, "y": 300,
          "rotation": 10, "tag": "crate" }
    ],
    "triggers": [ { "tag": "crate", "on": "grab", "action": "enableGravity" } ]
}"##;

fn surface() -> Surface {
    Surface::new(800.0, 800.0, 2.0).unwrap()
}

#[test]
fn scene_json_loads_and_draws_every_body() {
    let core = SimulationCore::from_scene_json(SCENE, surface()).unwrap();
    assert_eq!(core.body_count(), 3);
    assert_eq!(core.draw_list().len(), 3);
    assert_eq!(core.draw_list()[2].kind, DRAW_KIND_RECT);
    assert_eq!(DRAW_COMMAND_WORDS, 8);
}

#[test]
fn grabbing_the_crate_turns_on_gravity() {
    let mut core = SimulationCore::from_scene_json(SCENE, surface()).unwrap();
    assert!(!core.gravity_enabled());
    assert_eq!(core.pointer_down(300.0, 300.0), Some(3));
    assert!(core.gravity_enabled());
}

#[test]
fn thrown_body_stays_inside_the_surface() {
    let mut core = SimulationCore::from_scene_json(SCENE, surface()).unwrap();
    core.start();

    core.pointer_down(100.0, 100.0);
    for i in 1..=5 {
        core.pointer_move(100.0 + 30.0 * i as f32, 100.0 + 10.0 * i as f32);
    }
    core.pointer_up();

    let bounds = core.bounds();
    for _ in 0..1000 {
        core.tick();
        for body in core.bodies() {
            let half = body.half_extents();
            assert!(body.pos.is_finite());
            assert!(body.pos.x - half.x >= -1e-3, "body {} left of surface", body.id);
            assert!(body.pos.x + half.x <= bounds.width + 1e-3);
            assert!(body.pos.y - half.y >= -1e-3);
            assert!(body.pos.y + half.y <= bounds.height + 1e-3);
        }
    }
}

#[test]
fn rejects_degenerate_surface() {
    assert!(Surface::new(800.0, 0.0, 2.0).is_err());
    assert!(Surface::new(800.0, 600.0, f32::NAN).is_err());
}

#[test]
fn default_scene_is_the_four_disks() {
    let scene = SceneBundle::default_scene();
    let core = SimulationCore::new(&scene, surface()).unwrap();
    let radii: Vec<f32> = core
        .bodies()
        .iter()
        .map(|b| b.effective_radius(Vec2::UNIT_X))
        .collect();
    assert_eq!(radii, vec![20.0, 25.0, 30.0, 30.0]);
}
