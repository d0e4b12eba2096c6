use super::Certificate;
use crate::radar::{self, Point, RING_LEVELS};
use std::borrow::Cow;
use std::fmt::Write;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

const NAVY: &str = "#050b2c";
const AMBER: &str = "#f59e0b";
const GRAY: &str = "#9ca3af";
const INDIGO: &str = "#4f46e5";
const PURPLE: &str = "#9333ea";

const RADAR_CENTER: Point = Point { x: 400.0, y: 452.0 };
const RADAR_RADIUS: f64 = 30.0;

/// Render the certificate as a standalone SVG document.
pub fn render_svg(cert: &Certificate) -> String {
    let mut out = String::with_capacity(8 * 1024);
    // Writing to a String cannot fail.
    let _ = write_document(&mut out, cert);
    out
}

fn write_document(out: &mut String, cert: &Certificate) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    )?;
    writeln!(out, "  <title>AI-Q India Certificate: {}</title>", escape(cert.recipient()))?;
    writeln!(out, "  <desc>{}</desc>", escape(&cert.description))?;
    write_defs(out)?;
    write_background(out)?;
    write_header(out, cert)?;
    write_body(out, cert)?;
    write_radar(out, cert)?;
    write_footer(out, cert)?;
    write_corners(out)?;
    writeln!(out, "</svg>")
}

fn write_defs(out: &mut String) -> std::fmt::Result {
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <linearGradient id="title-gradient" x1="0" y1="0" x2="1" y2="0"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
        INDIGO, PURPLE
    )?;
    writeln!(
        out,
        r#"    <filter id="glow" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="50"/></filter>"#
    )?;
    writeln!(out, "  </defs>")
}

fn write_background(out: &mut String) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        WIDTH, HEIGHT, NAVY
    )?;
    writeln!(
        out,
        r#"  <circle cx="48" cy="48" r="128" fill="{}" opacity="0.1" filter="url(#glow)"/>"#,
        INDIGO
    )?;
    writeln!(
        out,
        r#"  <circle cx="752" cy="552" r="128" fill="{}" opacity="0.1" filter="url(#glow)"/>"#,
        PURPLE
    )?;
    writeln!(
        out,
        r#"  <rect x="6" y="6" width="{}" height="{}" fill="none" stroke="{}" stroke-opacity="0.2" stroke-width="12"/>"#,
        WIDTH - 12,
        HEIGHT - 12,
        AMBER
    )
}

fn write_header(out: &mut String, cert: &Certificate) -> std::fmt::Result {
    // shield
    writeln!(
        out,
        r#"  <path d="M380 34 L400 26 L420 34 L420 50 Q420 64 400 72 Q380 64 380 50 Z" fill="none" stroke="{}" stroke-width="3"/>"#,
        AMBER
    )?;
    writeln!(
        out,
        r#"  <path d="M391 49 L398 56 L410 42" fill="none" stroke="{}" stroke-width="3"/>"#,
        AMBER
    )?;
    writeln!(
        out,
        r#"  <text x="400" y="108" text-anchor="middle" font-size="30" font-weight="900" letter-spacing="6" fill="{}">AI-Q INDIA CERTIFIED</text>"#,
        AMBER
    )?;
    writeln!(
        out,
        r#"  <text x="400" y="132" text-anchor="middle" font-size="14" font-weight="500" fill="{}">FUTURE-READY ASSESSMENT {}</text>"#,
        GRAY,
        cert.year()
    )
}

fn write_body(out: &mut String, cert: &Certificate) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <text x="400" y="186" text-anchor="middle" font-size="18" font-style="italic" fill="{}">This is to certify that</text>"#,
        GRAY
    )?;
    writeln!(
        out,
        r##"  <text x="400" y="232" text-anchor="middle" font-size="36" font-weight="bold" fill="#ffffff">{}</text>"##,
        escape(cert.recipient())
    )?;
    writeln!(
        out,
        r#"  <line x1="250" y1="244" x2="550" y2="244" stroke="{}" stroke-opacity="0.5" stroke-width="2"/>"#,
        AMBER
    )?;
    writeln!(
        out,
        r#"  <text x="400" y="288" text-anchor="middle" font-size="18" fill="{}">has been recognized as</text>"#,
        GRAY
    )?;
    writeln!(
        out,
        r##"  <rect x="110" y="302" width="580" height="64" rx="8" fill="#ffffff" fill-opacity="0.03" stroke="#ffffff" stroke-opacity="0.05"/>"##
    )?;
    writeln!(
        out,
        r#"  <text x="400" y="346" text-anchor="middle" font-size="34" font-weight="900" fill="url(#title-gradient)">{}</text>"#,
        escape(&cert.title.to_uppercase())
    )?;
    if !cert.tags.is_empty() {
        writeln!(
            out,
            r#"  <text x="400" y="390" text-anchor="middle" font-size="12" letter-spacing="1" fill="{}">{}</text>"#,
            GRAY,
            escape(&cert.tags.join("  \u{00b7}  "))
        )?;
    }
    Ok(())
}

fn write_radar(out: &mut String, cert: &Certificate) -> std::fmt::Result {
    let count = cert.dimension_scores.len();
    if count < 3 {
        return Ok(());
    }

    writeln!(out, r#"  <g class="radar">"#)?;
    for level in RING_LEVELS {
        let ring = radar::ring(count, level, RADAR_CENTER, RADAR_RADIUS);
        writeln!(
            out,
            r##"    <polygon points="{}" fill="none" stroke="#ffffff" stroke-opacity="0.1"/>"##,
            polygon(&ring)
        )?;
    }
    for end in radar::axis_ends(count, RADAR_CENTER, RADAR_RADIUS) {
        writeln!(
            out,
            r##"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#ffffff" stroke-opacity="0.1"/>"##,
            RADAR_CENTER.x, RADAR_CENTER.y, end.x, end.y
        )?;
    }
    let shape = radar::radar_points(&cert.dimension_scores, RADAR_CENTER, RADAR_RADIUS);
    writeln!(
        out,
        r#"    <polygon points="{}" fill="{}" fill-opacity="0.35" stroke="{}" stroke-width="1.5"/>"#,
        polygon(&shape),
        INDIGO,
        PURPLE
    )?;
    let labels = radar::label_positions(count, RADAR_CENTER, RADAR_RADIUS);
    for (score, at) in cert.dimension_scores.iter().zip(labels) {
        let anchor = if (at.x - RADAR_CENTER.x).abs() < 1.0 {
            "middle"
        } else if at.x > RADAR_CENTER.x {
            "start"
        } else {
            "end"
        };
        writeln!(
            out,
            r#"    <text x="{:.1}" y="{:.1}" text-anchor="{}" font-size="9" fill="{}">{}</text>"#,
            at.x,
            at.y + 3.0,
            anchor,
            GRAY,
            escape(score.label)
        )?;
    }
    writeln!(out, "  </g>")
}

fn write_footer(out: &mut String, cert: &Certificate) -> std::fmt::Result {
    writeln!(
        out,
        r##"  <line x1="50" y1="500" x2="750" y2="500" stroke="#ffffff" stroke-opacity="0.1"/>"##
    )?;
    writeln!(
        out,
        r#"  <text x="60" y="530" font-size="10" letter-spacing="2" fill="{}">ASSESSMENT DATE</text>"#,
        GRAY
    )?;
    writeln!(
        out,
        r##"  <text x="60" y="552" font-size="16" font-weight="bold" fill="#ffffff">{}</text>"##,
        escape(&cert.date_text())
    )?;
    writeln!(
        out,
        r#"  <circle cx="400" cy="540" r="28" fill="{a}" fill-opacity="0.05" stroke="{a}" stroke-opacity="0.3" stroke-width="2"/>"#,
        a = AMBER
    )?;
    writeln!(
        out,
        r#"  <text x="400" y="544" text-anchor="middle" font-size="11" font-weight="900" fill="{}" transform="rotate(12 400 540)">SEAL</text>"#,
        AMBER
    )?;
    writeln!(
        out,
        r#"  <text x="740" y="530" text-anchor="end" font-size="10" letter-spacing="2" fill="{}">CERTIFICATE ID</text>"#,
        GRAY
    )?;
    writeln!(
        out,
        r#"  <text x="740" y="552" text-anchor="end" font-family="monospace" font-size="14" font-weight="bold" fill="{}">{}</text>"#,
        AMBER,
        escape(&cert.id)
    )
}

fn write_corners(out: &mut String) -> std::fmt::Result {
    let w = WIDTH;
    let h = HEIGHT;
    let corners = [
        "M2 98 L2 2 L98 2".to_string(),
        format!("M{} 2 L{} 2 L{} 98", w - 98, w - 2, w - 2),
        format!("M2 {} L2 {} L98 {}", h - 98, h - 2, h - 2),
        format!("M{} {} L{} {} L{} {}", w - 98, h - 2, w - 2, h - 2, w - 2, h - 98),
    ];
    for d in corners {
        writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="0.3" stroke-width="4"/>"#,
            d, AMBER
        )?;
    }
    Ok(())
}

fn polygon(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape text for use inside XML element content and attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{calculate_result, FixedSource, Totals};
    use chrono::NaiveDate;

    fn certificate(name: &str) -> Certificate {
        let result = calculate_result(Totals::new(52, 51, 16), 12, &mut FixedSource::zero());
        Certificate::new(
            name,
            &result,
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            &mut FixedSource::zero(),
        )
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A & B <x> \"q\" 'a'"), "A &amp; B &lt;x&gt; &quot;q&quot; &apos;a&apos;");
        assert!(matches!(escape("Plain Name"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_document_contents() {
        let svg = render_svg(&certificate("Meera Iyer"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="800" height="600""#));
        assert!(svg.contains("AI-Q INDIA CERTIFIED"));
        assert!(svg.contains("FUTURE-READY ASSESSMENT 2026"));
        assert!(svg.contains("This is to certify that"));
        assert!(svg.contains(">Meera Iyer<"));
        assert!(svg.contains("has been recognized as"));
        assert!(svg.contains("THE VISIONARY ARCHITECT"));
        assert!(svg.contains("17 October 2026"));
        assert!(svg.contains("AIQ-2026-ZZZZZZ"));
        assert!(svg.contains(NAVY));
        assert!(svg.contains("Risk Awareness"));
    }

    #[test]
    fn test_blank_name_renders_default() {
        let svg = render_svg(&certificate(""));
        assert!(svg.contains(">Global Professional<"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let svg = render_svg(&certificate("<script>Tom & Jerry</script>"));
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;Tom &amp; Jerry&lt;/script&gt;"));
    }

    #[test]
    fn test_radar_has_five_rings() {
        let svg = render_svg(&certificate("A"));
        assert_eq!(svg.matches(r##"fill="none" stroke="#ffffff""##).count(), 5);
    }
}
