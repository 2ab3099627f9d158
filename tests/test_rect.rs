use world_one_one::rect::Rect;

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 32, 32);
    let b = Rect::new(16, 16, 32, 32);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn contained_rect_intersects() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(10, 10, 5, 5);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 32, 32);
    assert!(!a.intersects(&Rect::new(32, 0, 32, 32))); // right neighbour
    assert!(!a.intersects(&Rect::new(0, 32, 32, 32))); // below
    assert!(!a.intersects(&Rect::new(32, 32, 32, 32))); // corner
}

#[test]
fn overlap_on_one_axis_only_is_not_intersection() {
    let a = Rect::new(0, 0, 32, 32);
    assert!(!a.intersects(&Rect::new(10, 40, 32, 32)));
    assert!(!a.intersects(&Rect::new(40, 10, 32, 32)));
}

#[test]
fn edges_and_centre() {
    let r = Rect::new(10, 20, 28, 56);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 38);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 76);
    assert_eq!(r.center_x(), 24);
    assert_eq!(r.center_y(), 48);
}

#[test]
fn translate_returns_moved_copy() {
    let r = Rect::new(10, 20, 4, 5);
    let moved = r.translate(-15, 3);
    assert_eq!(moved, Rect::new(-5, 23, 4, 5));
    assert_eq!(r, Rect::new(10, 20, 4, 5));
}

#[test]
fn edge_setters_keep_size() {
    let mut r = Rect::new(0, 0, 28, 56);
    r.set_right(100);
    assert_eq!((r.x, r.right(), r.w), (72, 100, 28));
    r.set_left(5);
    assert_eq!((r.x, r.w), (5, 28));
    r.set_bottom(544);
    assert_eq!((r.y, r.bottom(), r.h), (488, 544, 56));
    r.set_top(32);
    assert_eq!((r.y, r.h), (32, 56));
}
