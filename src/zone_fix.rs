//! Save-file patch for unterminated zone polygons
//!
//! Some board writers leave the `(polygon` block of a freshly created zone
//! without its closing parenthesis. This walks the file line by line, tracks
//! the parenthesis depth inside each `(polygon` block and inserts the missing
//! `    )` before the `(filled_polygon` section or before the next `(zone (`.

/// Closing line inserted for an unterminated polygon
const CLOSING_LINE: &str = "    )";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FixState {
    Search,
    Counting { depth: i64 },
}

/// Patched text and the number of closing lines inserted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneFix {
    pub text: String,
    pub inserted: usize,
}

/// Patch `input`; every output line has trailing whitespace trimmed
pub fn fix_zone_polygons(input: &str) -> ZoneFix {
    let mut out: Vec<&str> = Vec::new();
    let mut inserted = 0;
    let mut state = FixState::Search;

    for line in input.lines() {
        state = match state {
            FixState::Search if line.contains("(polygon") => FixState::Counting { depth: 1 },
            FixState::Search => FixState::Search,
            FixState::Counting { depth } => {
                let mut next = FixState::Counting { depth };
                if line.contains("(filled_polygon") && depth > 0 {
                    out.push(CLOSING_LINE);
                    inserted += 1;
                    next = FixState::Search;
                }
                if line.contains("(zone (") && depth == 0 {
                    out.push(CLOSING_LINE);
                    inserted += 1;
                    next = FixState::Search;
                } else if let FixState::Counting { depth } = next {
                    next = FixState::Counting { depth: depth + paren_balance(line) };
                }
                next
            }
        };
        out.push(line.trim_end());
    }

    let mut text = out.join("\n");
    if !out.is_empty() {
        text.push('\n');
    }
    ZoneFix { text, inserted }
}

fn paren_balance(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_polygon_before_filled_polygon() {
        let input = "\
  (zone (net 1) (net_name GND) (layer F.Cu)
    (polygon
      (pts
        (xy 0 0) (xy 1 0) (xy 1 1)
      )
    (filled_polygon
      (pts (xy 0 0))
    )
  )
";
        let fix = fix_zone_polygons(input);
        assert_eq!(fix.inserted, 1);
        let lines: Vec<&str> = fix.text.lines().collect();
        assert_eq!(lines[5], "    )");
        assert_eq!(lines[6], "    (filled_polygon");
        assert_eq!(lines.len(), input.lines().count() + 1);
    }

    #[test]
    fn test_closes_polygon_before_next_zone() {
        let input = "\
    (polygon
      (pts
        (xy 0 0) (xy 1 0) (xy 1 1)
      )
  )
  (zone (net 2) (layer B.Cu)
";
        let fix = fix_zone_polygons(input);
        // the zone's own `)` brings depth to zero before the next zone starts
        assert_eq!(fix.inserted, 1);
        let lines: Vec<&str> = fix.text.lines().collect();
        assert_eq!(lines[5], "    )");
        assert_eq!(lines[6], "  (zone (net 2) (layer B.Cu)");
    }

    #[test]
    fn test_well_formed_file_is_untouched() {
        let input = "(kicad_pcb (version 4)   \n  (net 0 \"\")\n)\n";
        let fix = fix_zone_polygons(input);
        assert_eq!(fix.inserted, 0);
        assert_eq!(fix.text, "(kicad_pcb (version 4)\n  (net 0 \"\")\n)\n");
    }
}
