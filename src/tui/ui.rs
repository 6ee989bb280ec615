use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const NAV_HELP: &str = "↑↓ move  Enter open  Esc back  r home  q quit";
const EDIT_HELP: &str = "↑↓ adjust  Enter done";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, menu_area, help_area] = layout.areas(frame.area());

    let editing = app.navigator.editing();

    let mut title_bar = TitleBar::new(app.navigator.breadcrumb(), app.status_message.as_str(), editing);
    title_bar.render(frame, title_area);

    app.navigator.render(&mut tui.menu);
    tui.menu.render(frame, menu_area);

    draw_help(frame, help_area, editing);
}

fn draw_help(frame: &mut Frame, area: Rect, editing: bool) {
    let help = if editing { EDIT_HELP } else { NAV_HELP };
    frame.render_widget(Span::styled(help, Style::default().fg(Color::DarkGray)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::NavOptions;
    use crate::test_support::scenario;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_at_root() {
        let app = App::new(scenario().0, NavOptions::default());
        let mut tui = TuiState::new();

        let text = draw(&app, &mut tui);

        assert!(text.contains("A"));
        assert!(text.contains("B ›"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_draw_ui_while_editing() {
        let mut app = App::new(scenario().0, NavOptions::default());
        let mut tui = TuiState::new();
        update(&mut app, Action::Advance);
        update(&mut app, Action::Activate);
        update(&mut app, Action::Advance);
        update(&mut app, Action::Activate);

        let text = draw(&app, &mut tui);

        assert!(text.contains("A › B"));
        assert!(text.contains("EDIT"));
        assert!(text.contains("Enter done"));
        assert_eq!(tui.menu.selected(), Some(1));
    }
}
