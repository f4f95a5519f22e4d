//! Turning a selected class name into a page the browser can open.

/// Strip every character outside `A-Z a-z 0-9 - _ .`.
///
/// Mirrors the file-naming rule the class pages were generated with. A
/// name containing a stripped character still displays and filters with
/// its original text but navigates to the stripped path.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

/// URL of the static page for a class, shared by the existence probes
/// and final navigation.
pub fn page_url(base_url: &str, name: &str) -> String {
    format!("{}/classes/{}.html", base_url, sanitize_name(name))
}

/// Hand the class page to the system browser. No existence check is
/// performed first; a failure to spawn the browser is logged and
/// otherwise ignored.
pub fn open_class_page(base_url: &str, name: &str) {
    let url = page_url(base_url, name);
    log::info!("Opening {}", url);
    if let Err(e) = open::that(&url) {
        log::error!("Failed to open {}: {}", url, e);
    }
}
