//! Page scripts evaluated in the content view.
//!
//! The automation scripts drive the hosted chat page through its DOM. They
//! are best effort: when the page layout changes they log to the page
//! console and do nothing.

use base64::Engine;

/// Reads the vertical scroll offset of the page.
pub const SCROLL_READ: &str =
    "(document.scrollingElement || document.documentElement).scrollTop";

/// Sets the vertical scroll offset read earlier by [`SCROLL_READ`].
pub fn scroll_restore(offset: f64) -> String {
    format!("(document.scrollingElement || document.documentElement).scrollTop = {offset};")
}

/// Parse the JSON-encoded result of [`SCROLL_READ`].
pub fn parse_scroll_offset(result: &str) -> Option<f64> {
    let value: serde_json::Value = serde_json::from_str(result).ok()?;
    value.as_f64().filter(|v| v.is_finite())
}

/// Initialization script for remote content: reports when the page opens
/// or closes its side canvas, so the host can switch layout to match.
pub const CANVAS_WATCH_INIT: &str = r#"
(function() {
    var open = false;
    function check() {
        var now = !!document.querySelector('immersive-panel, code-immersive-panel, .immersive-editor');
        if (now !== open) {
            open = now;
            if (window.hover && window.hover.ipc) {
                window.hover.ipc.send('canvas-state-changed', open);
            }
        }
    }
    document.addEventListener('DOMContentLoaded', function() {
        new MutationObserver(check).observe(document.body, { childList: true, subtree: true });
        check();
    });
})();
"#;

/// Which model a new chat should start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatModel {
    Flash,
    Pro,
}

impl ChatModel {
    /// Position of the model in the page's model menu.
    fn menu_index(self) -> usize {
        match self {
            ChatModel::Flash => 0,
            ChatModel::Pro => 1,
        }
    }
}

const DOM_HELPERS: &str = r#"
  const waitFor = (selector, timeout = 3000) => new Promise((resolve, reject) => {
    const timer = setInterval(() => {
      const el = document.querySelector(selector);
      if (el && !el.disabled) {
        clearInterval(timer);
        clearTimeout(limit);
        resolve(el);
      }
    }, 100);
    const limit = setTimeout(() => {
      clearInterval(timer);
      reject(new Error('element not found: ' + selector));
    }, timeout);
  });
  const click = (el) => {
    for (const type of ['mousedown', 'mouseup', 'click']) {
      el.dispatchEvent(new MouseEvent(type, { bubbles: true, cancelable: true, view: window }));
    }
  };
  const pause = (ms) => new Promise((resolve) => setTimeout(resolve, ms));
"#;

/// Opens a new chat and selects `model` in the model menu.
///
/// Falls back to pressing "New chat" first when the model menu is not
/// immediately reachable.
pub fn new_chat(model: ChatModel) -> String {
    format!(
        r#"(async function() {{
{DOM_HELPERS}
  try {{
    let switcher;
    try {{
      switcher = await waitFor('[data-test-id="bard-mode-menu-button"]');
    }} catch (_) {{
      click(await waitFor('[data-test-id="new-chat-button"] button', 5000));
      await pause(500);
      switcher = await waitFor('[data-test-id="bard-mode-menu-button"]', 5000);
    }}
    click(switcher);
    const panel = await waitFor('mat-bottom-sheet-container, .mat-mdc-menu-panel', 5000);
    const items = panel.querySelectorAll('button.mat-mdc-menu-item.bard-mode-list-button');
    if (items.length > {index}) {{
      await pause(150);
      click(items[{index}]);
    }} else {{
      console.warn('hover: model entry {index} not found');
      document.body.click();
    }}
  }} catch (error) {{
    console.warn('hover: new chat failed', error);
  }}
}})();"#,
        index = model.menu_index()
    )
}

/// Opens the sidebar search and focuses its input.
pub fn search() -> String {
    format!(
        r#"(async function() {{
{DOM_HELPERS}
  try {{
    const menu = document.querySelector('button[aria-label="Main menu"]');
    if (menu) {{
      click(menu);
      await pause(300);
    }}
    click(await waitFor('search-nav-bar button.search-nav-bar'));
    await pause(150);
    const input = await waitFor('input.search-input, input[placeholder="Search chats"]');
    input.focus();
  }} catch (error) {{
    console.warn('hover: search failed', error);
  }}
}})();"#
    )
}

/// Pastes a PNG image into the focused element of the page, as if the user
/// pressed the paste shortcut.
pub fn paste_image(png: &[u8]) -> String {
    paste_file("screenshot.png", "image/png", png)
}

/// Pastes `bytes` as a file called `name` into the focused element of the
/// page.
pub fn paste_file(name: &str, mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let name = serde_json::Value::from(name);
    let mime = serde_json::Value::from(mime);
    format!(
        r#"(function() {{
  const bytes = Uint8Array.from(atob('{encoded}'), (c) => c.charCodeAt(0));
  const file = new File([bytes], {name}, {{ type: {mime} }});
  const data = new DataTransfer();
  data.items.add(file);
  const target = document.activeElement || document.body;
  target.dispatchEvent(new ClipboardEvent('paste', {{ clipboardData: data, bubbles: true, cancelable: true }}));
  return true;
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_display_round_trips() {
        for offset in [0.0, 1234.0, 987.5, 0.1 + 0.2] {
            let script = scroll_restore(offset);
            let written = script
                .trim_end_matches(';')
                .rsplit("= ")
                .next()
                .unwrap();
            assert_eq!(written.parse::<f64>().unwrap(), offset);
        }
    }

    #[test]
    fn parses_scroll_results() {
        assert_eq!(parse_scroll_offset("1234"), Some(1234.0));
        assert_eq!(parse_scroll_offset("987.5"), Some(987.5));
        assert_eq!(parse_scroll_offset("null"), None);
        assert_eq!(parse_scroll_offset("\"12\""), None);
        assert_eq!(parse_scroll_offset(""), None);
    }

    #[test]
    fn new_chat_targets_model_index() {
        assert!(new_chat(ChatModel::Pro).contains("items[1]"));
        assert!(new_chat(ChatModel::Flash).contains("items[0]"));
    }

    #[test]
    fn search_script_focuses_input() {
        let js = search();
        assert!(js.contains("search-nav-bar"));
        assert!(js.contains("input.focus()"));
    }

    #[test]
    fn paste_embeds_base64_png() {
        let js = paste_image(&[0x89, b'P', b'N', b'G']);
        assert!(js.contains("atob('iVBORw==')"));
        assert!(js.contains("\"image/png\""));
        assert!(js.contains("\"screenshot.png\""));
    }

    #[test]
    fn paste_file_quotes_its_name() {
        let js = paste_file("it's \"mine\".pdf", "application/pdf", b"%PDF");
        assert!(js.contains(r#""it's \"mine\".pdf""#));
        assert!(js.contains("atob('JVBERg==')"));
    }
}
