//! Named template registry
//!
//! Each page route maps 1:1 to a named template. Templates are embedded
//! at compile time and returned verbatim as the response body.

/// Look up the HTML document for a named template.
pub fn render(name: &str) -> Option<&'static str> {
    match name {
        "index" => Some(include_str!("../../templates/index.html")),
        "jugadores" => Some(include_str!("../../templates/jugadores.html")),
        "live" => Some(include_str!("../../templates/live.html")),
        "partido" => Some(include_str!("../../templates/partido.html")),
        "reportes" => Some(include_str!("../../templates/reportes.html")),
        _ => None,
    }
}
