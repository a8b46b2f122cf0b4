//! Streaming SVG serialization of rendered wallpapers

use crate::algorithm::executor::{Shape, Wallpaper};
use crate::io::error::Result;
use crate::parameters::DecisionLog;
use std::io::Write;

/// Write the SVG document for `wallpaper`
///
/// Shapes are written as they are produced; the decision log follows them
/// as comments when the request asked for it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_svg<W: Write>(wallpaper: &Wallpaper, out: &mut W) -> Result<()> {
    let canvas = wallpaper.canvas();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width(),
        h = canvas.height(),
    )?;

    for shape in wallpaper.shapes() {
        writeln!(out, "{}", path_element(&shape))?;
    }

    if let Some(decisions) = wallpaper.reported_decisions() {
        write_decisions(decisions, out)?;
    }

    writeln!(out, "</svg>")?;
    out.flush()?;
    Ok(())
}

/// Render the whole document into a string
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_svg(wallpaper: &Wallpaper) -> Result<String> {
    let mut buffer = Vec::new();
    write_svg(wallpaper, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_decisions<W: Write>(decisions: &DecisionLog, out: &mut W) -> Result<()> {
    for decision in decisions {
        // "--" may not appear inside an XML comment
        let key = decision.key.replace("--", "-");
        writeln!(out, "<!-- {key}={} -->", decision.value)?;
    }
    Ok(())
}

/// One closed `<path>` element, filled and stroked with the shape color
pub fn path_element(shape: &Shape) -> String {
    let mut data = String::new();
    for (index, point) in shape.points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{command} {:.2} {:.2}", point.x, point.y));
    }
    data.push_str(" Z");

    format!(
        r##"<path d="{data}" fill="#{color}" stroke="#{color}"/>"##,
        color = shape.color
    )
}
