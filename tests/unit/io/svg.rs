//! Tests for SVG serialization

#[cfg(test)]
mod tests {
    use wallweave::algorithm::executor::{RenderRequest, Shape, Wallpaper};
    use wallweave::io::svg::{path_element, render_svg, write_svg};
    use wallweave::spatial::point::Point;

    fn request() -> RenderRequest {
        RenderRequest::new(90, 60)
            .with_seed("svg")
            .with_override("pattern", "Squares")
    }

    // Tests path elements use two decimals and close the path
    // Verified by formatting with default float precision
    #[test]
    fn test_path_element() {
        let shape = Shape {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(1.5, 2.254),
                Point::new(3.0, 0.004),
            ],
            color: "0a0b0c".to_string(),
        };
        assert_eq!(
            path_element(&shape),
            r##"<path d="M 0.00 0.00 L 1.50 2.25 L 3.00 0.00 Z" fill="#0a0b0c" stroke="#0a0b0c"/>"##
        );
    }

    // Tests the document wraps one path per visible shape
    // Verified by skipping the closing tag
    #[test]
    fn test_document_structure() {
        let wallpaper = Wallpaper::generate(&request()).expect("valid");
        let svg = render_svg(&wallpaper).expect("serializes");

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="90" height="60""#));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<path ").count(), wallpaper.shapes().count());
        assert!(!svg.contains("<!--"));
    }

    // Tests the decision log follows the shapes when requested
    // Verified by writing comments before the first path
    #[test]
    fn test_decision_comments() {
        let wallpaper = Wallpaper::generate(&request().with_log_choices(true)).expect("valid");
        let svg = render_svg(&wallpaper).expect("serializes");

        assert!(svg.contains("<!-- pattern=Squares -->"));
        assert_eq!(svg.matches("<!--").count(), wallpaper.decisions().len());

        let last_path = svg.rfind("<path ").expect("some shapes");
        let first_comment = svg.find("<!--").expect("some comments");
        assert!(first_comment > last_path);
    }

    // Tests writing to any writer produces the same bytes
    // Verified by buffering differently for strings
    #[test]
    fn test_write_matches_render() {
        let wallpaper = Wallpaper::generate(&request()).expect("valid");
        let mut buffer = Vec::new();
        write_svg(&wallpaper, &mut buffer).expect("writes");
        assert_eq!(
            String::from_utf8(buffer).expect("utf-8"),
            render_svg(&wallpaper).expect("serializes")
        );
    }
}
