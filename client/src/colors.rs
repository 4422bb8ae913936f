use treemap_shared::Rgb;

/// Format RGBA as a CSS color string.
pub fn rgba_css(color: Rgb, a: f64) -> String {
    let Rgb(r, g, b) = color;
    format!("rgba({r},{g},{b},{a})")
}
