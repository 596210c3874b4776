//! Help screen: modal overlay showing the key reference.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

/// Help screen state.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self {
            visible: false,
            content: Self::build_content(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        vec![
            h("PLAY"),
            l("  Space/Enter/p  Send a play request"),
            l(""),
            h("DIALS"),
            l("  Up/Down (k/j)  Select dial"),
            l("  Left/Right     Nudge by one step"),
            l("  Shift+arrows   Nudge by ten steps (also H/L, PgUp/PgDn)"),
            l(""),
            h("WAVEFORM"),
            l("  w / W          Next / previous waveform"),
            l(""),
            h("OTHER"),
            l("  c              Show/hide outcome console"),
            l("  ?              Toggle this help screen"),
            l("  Esc            Close overlay"),
            l("  q / Ctrl-C     Quit"),
        ]
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
