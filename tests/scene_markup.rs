use vistula::{Element, Scene, render_scene};
use vistula::render::svg::scene_to_svg_string;

fn decorations_group(root: &Element) -> &Element {
    root.child_elements()
        .find(|e| e.attr_value("class") == Some("decorations"))
        .expect("decorations group")
}

#[test]
fn decoration_nodes_match_config_in_count_and_order() {
    let scene = Scene::dawn();
    let root = render_scene(&scene).unwrap();
    let flags: Vec<&Element> = decorations_group(&root).child_elements().collect();

    assert_eq!(flags.len(), scene.decoration_count());

    let offsets: Vec<&str> = flags
        .iter()
        .map(|f| f.attr_value("data-offset").unwrap())
        .collect();
    assert_eq!(
        offsets,
        vec![
            "2%", "9%", "16%", "23%", "30%", "37%", "44%", "51%", "58%", "65%", "72%", "79%"
        ]
    );
}

#[test]
fn decoration_attributes_bind_descriptor_fields() {
    let root = render_scene(&Scene::dawn()).unwrap();
    let flags: Vec<&Element> = decorations_group(&root).child_elements().collect();

    // Second entry of the flag table: 9%, 0.6s, 0.9, 11, -2deg, layer 7.
    let flag = flags[1];
    assert_eq!(flag.attr_value("data-layer"), Some("7"));
    assert_eq!(flag.attr_value("style"), Some("animation-delay:0.6s"));
    let transform = flag.attr_value("transform").unwrap();
    assert!(transform.contains("rotate(-2)"));
    assert!(transform.contains("scale(0.9)"));
    assert_eq!(flag.attr_value("aria-hidden"), Some("true"));

    // Pole height binds size * unit (11 * 16).
    let pole = flag
        .child_elements()
        .find(|e| e.attr_value("class") == Some("pole"))
        .unwrap();
    assert_eq!(pole.attr_value("height"), Some("176"));
}

#[test]
fn scene_contains_panorama_figure_overlays_and_titles() {
    let scene = Scene::dawn();
    let svg = scene_to_svg_string(&scene).unwrap();

    assert!(svg.contains("class=\"panorama\""));
    assert!(svg.contains("class=\"skyline\""));
    assert!(svg.contains("class=\"figure\""));
    assert!(svg.contains("url(#overlay-vignette)"));
    assert!(svg.contains("url(#overlay-grain)"));
    assert!(svg.contains("Świt Odrodzenia"));
    assert!(svg.contains("Warsaw, 11 listopada 1918"));
}

#[test]
fn rendered_svg_parses_back_with_usvg() {
    let scene = Scene::dawn();
    let svg = scene_to_svg_string(&scene).unwrap();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert!((tree.size().width() - 1200.0).abs() < 0.5);
    assert!((tree.size().height() - 800.0).abs() < 0.5);
}

#[test]
fn projection_is_stable_across_renders() {
    let scene = Scene::dawn();
    assert_eq!(
        scene_to_svg_string(&scene).unwrap(),
        scene_to_svg_string(&scene).unwrap()
    );
}
