use glam::DVec3;
use openscad_csg::{
    cube, cylinder, difference, linear_extrude, print, rotate, text, translate, union, CsgError,
    GeometryNode, ScadDocument,
};

#[test]
fn prints_angled_slot_cut() {
    let slot = translate(
        DVec3::new(2.0, 0.0, 4.5),
        rotate(
            DVec3::new(-15.0, 0.0, 0.0),
            translate(DVec3::new(0.0, -50.0, 0.0), cube(DVec3::new(17.0, 62.8, 4.2))),
        ),
    );
    let src = print(&slot).unwrap();
    let lines: Vec<&str> = src.lines().collect();
    assert_eq!(lines[0], "translate(v = [2, 0, 4.5]) {");
    assert_eq!(lines[1], "\trotate(a = [-15, 0, 0]) {");
    assert_eq!(lines[2], "\t\ttranslate(v = [0, -50, 0]) {");
    assert_eq!(lines[3], "\t\t\tcube(size = [17, 62.8, 4.2]);");
    assert_eq!(lines.len(), 7);
}

#[test]
fn braces_balance_in_nested_tree() {
    let tree = union(vec![
        difference(vec![
            cube(DVec3::splat(20.0)),
            translate(DVec3::new(10.0, -5.0, -5.0), cylinder(30.0, 15.0)),
            translate(DVec3::new(10.0, 10.0, 19.1), linear_extrude(2.0, text("X", 3.5))),
        ]),
        translate(DVec3::new(20.0, 0.0, 0.0), cube(DVec3::splat(20.0))),
    ]);
    let src = print(&tree).unwrap();
    assert_eq!(src.matches('{').count(), src.matches('}').count());
    assert_eq!(tree.count_named("cube"), 2);
}

#[test]
fn document_serializes_tree_and_header() {
    let doc = ScadDocument::new(cube(DVec3::ONE)).with_header_comment("test");
    let src = doc.render().unwrap();
    assert!(src.starts_with("// test\n$fn = 48;\n"));
}

#[test]
fn non_finite_values_are_errors() {
    let tree = translate(DVec3::new(0.0, f64::NAN, 0.0), cube(DVec3::ONE));
    match print(&tree) {
        Err(CsgError::NonFinite { node, .. }) => assert_eq!(node, "translate"),
        other => panic!("expected non-finite error, got {:?}", other),
    }
}

#[test]
fn empty_children_are_dropped() {
    let tree = union(vec![GeometryNode::Empty, cube(DVec3::ONE), GeometryNode::Empty]);
    assert_eq!(tree.name(), "cube");
}
