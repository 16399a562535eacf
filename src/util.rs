// Small helpers shared across components.

use url::Url;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

/// Constructor-based URL validation: the input must parse as an absolute
/// URL on its own. Returns a user-facing message on rejection.
pub fn validate_url(input: &str) -> Result<(), &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Please enter a URL");
    }
    match Url::parse(trimmed) {
        Ok(_) => Ok(()),
        Err(_) => Err("Please enter a valid URL"),
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Write `text` to the system clipboard and report success on `done`.
/// Clipboard access can fail (permissions, insecure context); callers show
/// a toast either way instead of propagating the error.
pub fn copy_to_clipboard(text: &str, done: Callback<bool>) {
    let Some(win) = web_sys::window() else {
        done.emit(false);
        return;
    };
    let promise = win.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        done.emit(JsFuture::from(promise).await.is_ok());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://threejs.org/examples/webgl_animation_cloth.html").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate_url(""), Err("Please enter a URL"));
        assert_eq!(validate_url("   "), Err("Please enter a URL"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(validate_url("not a url"), Err("Please enter a valid URL"));
        // No scheme means no absolute URL.
        assert_eq!(validate_url("example.com"), Err("Please enter a valid URL"));
        assert_eq!(validate_url("//example.com"), Err("Please enter a valid URL"));
    }
}
