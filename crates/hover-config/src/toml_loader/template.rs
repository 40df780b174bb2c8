//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hover Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[general]
# always_on_top = true
# canvas_resize_enabled = true
# theme = "system"         # system | light | dark
# auto_start = false       # start Hover when you log in

[shortcuts]
# global = true            # false: shortcuts only fire while a window is focused
# show_hide = "Alt+G"      # always registered system-wide
# quit = "Control+W"
# show_instructions = "Alt+I"
# screenshot = "Control+Alt+S"
# new_chat_pro = "Alt+P"
# new_chat_flash = "Alt+F"
# new_window = "Alt+N"
# search = "Alt+S"
# refresh = "Alt+R"
# close_window = "Alt+Q"

[window]
# default_width = 500
# default_height = 650
# canvas_width = 1400
# canvas_height = 800
# margin = 20              # 0-200
# chrome_height = 30       # 0-100

[animation]
# duration_ms = 200        # 0-2000
# steps = 20               # 1-240
# scroll_restore_delay_ms = 100
# recenter_delay_ms = 10

[content]
# url = "https://gemini.google.com/app"
# partition = "gemini-session"

[logging]
# level = "INFO"           # DEBUG | INFO | WARNING | ERROR
"##
    .to_string()
}
