// Polygon-closing patch on a board save file excerpt
use teardrops::fix_zone_polygons;

const BROKEN: &str = "\
(kicad_pcb (version 4) (host pcbnew 4.0.7)
  (zone (net 3) (net_name VCC) (layer F.Cu) (tstamp 0) (hatch edge 0.508)
    (connect_pads yes (clearance 0.2))
    (min_thickness 0.0254)
    (fill yes (arc_segments 16) (thermal_gap 0.508) (thermal_bridge_width 0.508))
    (polygon
      (pts
        (xy 100 100) (xy 101 100) (xy 100.5 101) (xy 100 100.2)
      )
    (filled_polygon
      (pts
        (xy 100 100) (xy 101 100) (xy 100.5 101)
      )
    )
  )
)
";

#[test]
fn test_fix_teardrop_zone_in_save_file() {
    let fix = fix_zone_polygons(BROKEN);
    assert_eq!(fix.inserted, 1);

    let opens = fix.text.matches('(').count();
    let closes = fix.text.matches(')').count();
    assert_eq!(opens, closes, "fixed file must balance parentheses");

    // Running the fix on fixed output changes nothing
    let again = fix_zone_polygons(&fix.text);
    assert_eq!(again.inserted, 0);
    assert_eq!(again.text, fix.text);
    println!("✓ Zone polygon closed, {} lines", fix.text.lines().count());
}
