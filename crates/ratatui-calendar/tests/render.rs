use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui_calendar::calendar::CalendarState;
use ratatui_calendar::calendar_view::CalendarView;
use ratatui_calendar::calendar_view::CalendarViewAction;
use ratatui_calendar::config::CalendarConfig;
use ratatui_calendar::config::RangeCalendarConfig;
use ratatui_calendar::input::InputEvent;
use ratatui_calendar::input::KeyModifiers;
use ratatui_calendar::input::MouseButton;
use ratatui_calendar::input::MouseEvent;
use ratatui_calendar::input::MouseEventKind;
use ratatui_calendar::range::RangeCalendarState;
use ratatui_calendar::theme::CalendarTheme;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        x,
        y,
        kind: MouseEventKind::Down(MouseButton::Left),
        modifiers: KeyModifiers::none(),
    })
}

#[test]
fn march_2024_layout() {
    let s = CalendarState::new(CalendarConfig::new().today(d(2024, 3, 15)).auto_focus(true));
    let mut view = CalendarView::new();
    let area = Rect::new(0, 0, 21, 8);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf, &CalendarTheme::default(), &s);

    assert_eq!(row(&buf, 0), "‹     March 2024    ›");
    assert_eq!(row(&buf, 1), " Su Mo Tu We Th Fr Sa");
    // Feb 25 through Mar 2, day numbers centered in 3-column cells.
    assert_eq!(row(&buf, 2), " 25 26 27 28 29 1  2 ");
    // Sixth week row: Mar 31 then April filler.
    assert_eq!(row(&buf, 7), " 31 1  2  3  4  5  6 ");

    // Mar 15 is a Friday on the third week row.
    let focused = &buf[(16, 4)];
    assert!(focused.modifier.contains(Modifier::REVERSED));
    assert!(!buf[(13, 4)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn clicks_build_a_range() {
    let mut s = RangeCalendarState::new(RangeCalendarConfig::new().today(d(2024, 3, 15)));
    let mut view = CalendarView::new();
    let area = Rect::new(0, 0, 21, 8);
    let theme = CalendarTheme::default();
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf, &theme, &s);

    // Mar 4 (Monday, second row) then Mar 6.
    assert_eq!(view.handle_event(click(4, 3), &mut s), CalendarViewAction::SelectionChanged);
    assert_eq!(s.anchor_date(), Some(d(2024, 3, 4)));
    assert_eq!(view.handle_event(click(10, 3), &mut s), CalendarViewAction::SelectionChanged);
    let range = s.value().expect("committed range");
    assert_eq!((range.start(), range.end()), (d(2024, 3, 4), d(2024, 3, 6)));

    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf, &theme, &s);
    let selected_bg = theme.selected.bg;
    assert_eq!(buf[(7, 3)].bg, selected_bg.expect("selected background"));
}
