use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.base_url()).widget(), header);

    frame.render_widget(Clear, body);
    let lines = app.body_lines();
    if !lines.is_empty() {
        let widget = Paragraph::new(lines).scroll((app.scroll(), 0));
        frame.render_widget(widget, body);
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}
