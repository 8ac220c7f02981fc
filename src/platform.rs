use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo::timers::future::TimeoutFuture::new(millis).await;
}

/// Plays a short cue when a message goes out. Failures are swallowed.
pub trait SendSound {
    fn play(&self);
}

/// Escapes `value` for embedding in a single-quoted JavaScript string.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Script that plays `url` at `volume`, ignoring autoplay rejections.
pub fn send_sound_script(url: &str, volume: f32) -> String {
    format!(
        "try {{ const a = new Audio({}); a.volume = {}; a.play().catch(() => {{}}); }} catch (_) {{}}",
        js_string(url),
        volume.clamp(0.0, 1.0)
    )
}

/// Script that syncs the `dark-mode` class on `<body>`.
pub fn body_theme_script(dark: bool) -> String {
    format!("document.body.classList.toggle('dark-mode', {dark});")
}

/// Script that pins a scrollable element to its bottom.
pub fn scroll_to_bottom_script(element_id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.scrollTop = el.scrollHeight; }}",
        js_string(element_id)
    )
}

/// Awaits `read`, then runs `reset`. Emptying a file input drops its
/// `FileList`, so the picked file must be read first.
pub async fn read_then_reset<T>(read: impl Future<Output = T>, reset: impl FnOnce()) -> T {
    let picked = read.await;
    reset();
    picked
}

/// Script that empties an input so the same file can be picked again.
pub fn reset_input_script(element_id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.value = ''; }}",
        js_string(element_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string("plain"), "'plain'");
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string("</script>"), r"'\x3c/script>'");
    }

    #[test]
    fn test_send_sound_script() {
        let script = send_sound_script("https://cdn.example/whoosh.mp3", 0.3);
        assert!(script.contains("new Audio('https://cdn.example/whoosh.mp3')"));
        assert!(script.contains("a.volume = 0.3"));
        assert!(script.contains(".catch(() => {})"));
    }

    #[test]
    fn test_body_theme_script() {
        assert_eq!(
            body_theme_script(true),
            "document.body.classList.toggle('dark-mode', true);"
        );
    }

    #[tokio::test]
    async fn test_file_is_read_before_input_reset() {
        let reset = Cell::new(false);
        let read = async {
            assert!(!reset.get(), "input emptied before the file was read");
            Some(b"notes".to_vec())
        };

        let picked = read_then_reset(read, || reset.set(true)).await;

        assert_eq!(picked.as_deref(), Some(&b"notes"[..]));
        assert!(reset.get());
    }

    #[tokio::test]
    async fn test_input_is_reset_when_read_fails() {
        let reset = Cell::new(false);
        let picked: Option<Vec<u8>> = read_then_reset(async { None }, || reset.set(true)).await;
        assert!(picked.is_none());
        assert!(reset.get());
    }

    #[test]
    fn test_element_scripts_quote_ids() {
        assert!(scroll_to_bottom_script("chat-messages").contains("getElementById('chat-messages')"));
        assert!(reset_input_script("file-input").contains("el.value = ''"));
    }
}
