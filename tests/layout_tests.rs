use pinout::layout::defaults::{PADDING, PIN_SPACE};
use pinout::layout::{Assembler, ImageSpec, PinGrid, diff, reconcile};
use pinout::scene::{Alignment, Circle, Group, Node, NodeBuilder, Rect, Text, align};
use pinout::{BBox, Drawable, LayoutError, Padding, Rotation};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn pins(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// Depth-first search for the first node matching `pred`
fn find<'a>(node: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    if pred(node) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find(child, pred))
}

fn count(node: &Node, tag: &str) -> usize {
    let own = usize::from(node.tag() == tag);
    own + node.children().iter().map(|c| count(c, tag)).sum::<usize>()
}

fn five_volt_grid() -> PinGrid {
    let mut grid = PinGrid {
        title: "Test".to_string(),
        width: 2,
        height: 2,
        ..PinGrid::default()
    };
    grid.pins.left = vec![pins(&["5V:power"])];
    grid
}

// ==================== Scene algebra ====================

#[test]
fn group_box_at_every_quarter_turn() {
    // content (0,0,100,40), center (50,20), translated by (10,-10)
    let expected = [
        (0.0, BBox::new(10.0, -10.0, 100.0, 40.0)),
        (90.0, BBox::new(40.0, -40.0, 40.0, 100.0)),
        (180.0, BBox::new(10.0, -10.0, 100.0, 40.0)),
        (270.0, BBox::new(40.0, -40.0, 40.0, 100.0)),
    ];
    for (angle, want) in expected {
        let mut g = Group::new().with_child(Rect::new(0.0, 0.0, 100.0, 40.0));
        g.set_translate(10.0, -10.0).set_rotation(angle);
        assert_eq!(g.bounding_box(), Some(want), "angle {angle}");
    }
}

#[test]
fn padding_is_applied_before_rotation() {
    let mut g = Group::new()
        .with_child(Rect::new(0.0, 0.0, 10.0, 10.0))
        .with_padding(Padding::try_new(0.0, 20.0, 0.0, 0.0).unwrap());
    // padded (0,0,30,10), center (15,5)
    g.set_rotation(90.0);
    assert_eq!(g.bounding_box(), Some(BBox::new(10.0, -10.0, 10.0, 30.0)));
}

#[test]
fn rightof_property() {
    let reference = Circle::new(0.0, 0.0, 60.0, "gold");
    let mut label = Group::new().with_child(Text::new(0.0, 0.0, "GPIO").with_attr("font-size", 150.0));
    label.align(Alignment::RightOf { gap: 300.0 }, &reference).unwrap();
    let own = label.bounding_box().unwrap();
    let r = reference.bounding_box().unwrap();
    assert!(close(own.x, r.x + r.width + 300.0));
    assert!(close(own.center().y, r.center().y));
    assert_eq!(label.rotation(), Rotation::Deg0);
}

#[test]
fn above_property() {
    let reference = Rect::new(100.0, 100.0, 50.0, 50.0);
    let mut label = Group::new().with_child(Rect::new(0.0, 0.0, 200.0, 60.0));
    label.align(Alignment::Above { gap: 100.0 }, &reference).unwrap();
    let own = label.bounding_box().unwrap();
    assert!(close(own.y + own.height + 100.0, 100.0));
    assert!(close(own.center().x, 125.0));
    assert!(close(own.height, 200.0));
    assert_eq!(label.rotation(), Rotation::Deg270);
}

#[test]
fn align_rejects_bad_names_and_gaps() {
    assert!(matches!(
        Alignment::from_name("diagonal", 10.0),
        Err(LayoutError::InvalidArgument { .. })
    ));
    let err = align(Alignment::Under { gap: -5.0 }, None, None).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidArgument { .. }));
}

// ==================== Symmetry ====================

#[test]
fn diff_rules() {
    assert_eq!(diff(0.0, 0.0), 0.0);
    assert_eq!(diff(5.0, 0.0), 0.0);
    // back greater than a negative front
    assert_eq!(diff(-30.0, 20.0), 50.0);
}

#[test]
fn overhanging_artwork_keeps_panel_on_flip() {
    let mut grid = five_volt_grid();
    grid.image.front = ImageSpec {
        src: "front.png".to_string(),
        top: -270.0,
        left: -100.0,
        right: -120.0,
        bottom: -50.0,
    };
    assert_eq!(
        reconcile(&grid.image.front, &grid.image.back),
        Padding::try_new(270.0, 120.0, 50.0, 100.0).unwrap()
    );

    let mut assembler = Assembler::new(grid).unwrap();
    let front = assembler.panel().bounding_box().unwrap();
    assembler.flip();
    let back = assembler.panel().bounding_box().unwrap();
    assert_eq!(front, back);
    assert_eq!(front, BBox::new(-500.0, -670.0, 1274.0, 1374.0));
}

// ==================== Whole diagrams ====================

#[test]
fn single_power_pin_diagram() {
    let root: Node = Assembler::new(five_volt_grid()).unwrap().build().unwrap().into();

    assert_eq!(count(&root, "circle"), 1);

    let marker = find(&root, &|n| n.tag() == "circle").unwrap();
    let label_text = find(&root, &|n| n.element().text() == Some("5V")).unwrap();
    assert_eq!(label_text.tag(), "text");

    let legend_entry = find(&root, &|n| n.element().text() == Some("Power"));
    assert!(legend_entry.is_some());
    assert!(find(&root, &|n| n.element().text() == Some("PIN")).is_none());

    // the marker sits at the origin of the pin layout
    assert_eq!(marker.bounding_box(), Some(BBox::new(-60.0, -60.0, 120.0, 120.0)));

    let Node::Root(svg) = &root else { unreachable!() };
    let view_box = svg.view_box().unwrap();
    assert_eq!(Some(view_box), root.bounding_box());
    assert_eq!((view_box.x, view_box.y), (0.0, 0.0));
}

#[test]
fn label_sits_three_paddings_left_of_its_pin() {
    let root = Assembler::new(five_volt_grid()).unwrap().build().unwrap();
    let content = root.element().children()[0].as_group().unwrap();
    let layout = content.element().children()[0].as_group().unwrap();
    // panel, then the left row
    let left_row = layout.element().children()[1].as_group().unwrap();
    let pin = &left_row.element().children()[0];
    let marker = pin.children()[0].bounding_box().unwrap();
    let label = pin.children()[1].bounding_box().unwrap();
    assert!(close(marker.x - (label.x + label.width), 3.0 * PADDING));
    assert!(close(marker.center().y, label.center().y));
}

#[test]
fn rows_follow_offsets() {
    let mut grid = PinGrid {
        width: 4,
        height: 3,
        ..PinGrid::default()
    };
    grid.offsets.right = 1.0;
    grid.pins.right = vec![vec![], pins(&["A"]), vec![]];
    let root: Node = Assembler::new(grid).unwrap().build().unwrap().into();
    let content = root.children()[0].as_group().unwrap();
    let layout = content.element().children()[0].as_group().unwrap();
    let right_row = layout.element().children()[2].as_group().unwrap();
    let marker = right_row.element().children()[0].children()[0].bounding_box().unwrap();
    assert_eq!(marker.center().x, 2.0 * PIN_SPACE);
    assert_eq!(marker.center().y, PIN_SPACE);
}

#[test]
fn flipping_twice_restores_the_diagram() {
    let mut grid = five_volt_grid();
    grid.pins.top = vec![pins(&["SDA:i2c", "4:gpio"]), pins(&["SCL:i2c"])];
    let mut assembler = Assembler::new(grid).unwrap();
    let original = assembler.build().unwrap();
    assembler.flip().flip();
    assert_eq!(assembler.build().unwrap(), original);
}

#[test]
fn unknown_types_use_default_styling() {
    let mut grid = five_volt_grid();
    grid.pins.left = vec![pins(&["X:mystery"])];
    let root: Node = Assembler::new(grid).unwrap().build().unwrap().into();
    assert!(find(&root, &|n| n.element().text() == Some("PIN")).is_some());
}

#[test]
fn labels_are_dropped_without_a_default_type() {
    let mut grid = five_volt_grid();
    grid.pins.left = vec![pins(&["X:mystery", "5V:power"])];
    grid.types.shift_remove("default");
    let root: Node = Assembler::new(grid).unwrap().build().unwrap().into();
    assert!(find(&root, &|n| n.element().text() == Some("X")).is_none());
    assert!(find(&root, &|n| n.element().text() == Some("5V")).is_some());
    assert_eq!(count(&root, "circle"), 1);
}

#[test]
fn oversized_rows_are_truncated() {
    let mut grid = five_volt_grid();
    grid.pins.bottom = vec![pins(&["A"]), pins(&["B"]), pins(&["C"])];
    let assembler = Assembler::new(grid).unwrap();
    assert_eq!(assembler.config().pins.bottom.len(), 2);
    let root: Node = assembler.build().unwrap().into();
    assert!(find(&root, &|n| n.element().text() == Some("C")).is_none());
}
