use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct CalendarTheme {
    pub header: Style,
    pub nav: Style,
    pub week_day: Style,
    pub day: Style,
    pub outside_month: Style,
    pub disabled: Style,
    pub today: Style,
    pub selected: Style,
    pub range: Style,
    /// Focused cell while the calendar holds keyboard focus.
    pub focused: Style,
    /// Focus target while the calendar is not focused.
    pub focus_target: Style,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            header: Style::default().bold(),
            nav: Style::default().cyan(),
            week_day: Style::default().dark_gray(),
            day: Style::default(),
            outside_month: Style::default().dark_gray(),
            disabled: Style::default().dark_gray().add_modifier(Modifier::DIM),
            today: Style::default().add_modifier(Modifier::UNDERLINED),
            selected: Style::default().black().on_cyan(),
            range: Style::default().on_dark_gray(),
            focused: Style::default().add_modifier(Modifier::REVERSED),
            focus_target: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}
