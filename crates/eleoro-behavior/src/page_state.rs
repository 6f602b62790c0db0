//! State transitions for the simple toggles: sticky nav, mobile menu,
//! dropdown, FAQ accordion and footer year.

/// Whether the navigation bar should carry the `scrolled` marker.
#[inline]
pub fn nav_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Mobile menu: burger icon and link list open and close together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Burger click.
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Any link in the menu was followed.
    pub fn close(self) -> Self {
        Self { open: false }
    }
}

/// Inline `display` values the toggles switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    /// Read an inline style value. Anything other than `block` counts as hidden,
    /// including the empty string of an element styled only by CSS.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "block" {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Display::Block => Display::None,
            Display::None => Display::Block,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Whether a tap on the dropdown toggle is handled in script. Above the
/// breakpoint the menu opens on hover via CSS and the click passes through.
#[inline]
pub fn dropdown_intercepts(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// One FAQ entry: question, collapsible answer, and a +/− glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqState {
    pub expanded: bool,
}

impl FaqState {
    pub fn from_display(value: &str) -> Self {
        Self {
            expanded: Display::parse(value) == Display::Block,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn display(self) -> Display {
        if self.expanded {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn glyph(self) -> &'static str {
        if self.expanded {
            "\u{2212}"
        } else {
            "+"
        }
    }
}

/// Footer copyright year.
pub fn year_text(year: u32) -> String {
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_exclusive() {
        assert!(!nav_scrolled(0.0, 50.0));
        assert!(!nav_scrolled(50.0, 50.0));
        assert!(nav_scrolled(50.5, 50.0));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.open);
        let menu = menu.toggle();
        assert!(menu.open);
        assert!(!menu.toggle().open);
        assert!(!menu.close().open);
        assert!(!MenuState::default().close().open);
    }

    #[test]
    fn display_parsing() {
        assert_eq!(Display::parse("block"), Display::Block);
        assert_eq!(Display::parse(" block "), Display::Block);
        assert_eq!(Display::parse(""), Display::None);
        assert_eq!(Display::parse("none"), Display::None);
        assert_eq!(Display::parse("flex"), Display::None);
    }

    #[test]
    fn display_toggle_round_trip() {
        assert_eq!(Display::None.toggled().as_css(), "block");
        assert_eq!(Display::Block.toggled().as_css(), "none");
    }

    #[test]
    fn dropdown_only_on_narrow_viewports() {
        assert!(dropdown_intercepts(375.0, 768.0));
        assert!(dropdown_intercepts(768.0, 768.0));
        assert!(!dropdown_intercepts(769.0, 768.0));
    }

    #[test]
    fn faq_glyph_follows_state() {
        let collapsed = FaqState::from_display("");
        assert_eq!(collapsed.glyph(), "+");
        assert_eq!(collapsed.display(), Display::None);

        let expanded = collapsed.toggled();
        assert_eq!(expanded.glyph(), "\u{2212}");
        assert_eq!(expanded.display(), Display::Block);
        assert_eq!(FaqState::from_display("block"), expanded);
    }

    #[test]
    fn year_is_plain_digits() {
        assert_eq!(year_text(2026), "2026");
    }
}
