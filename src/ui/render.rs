use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::generation::render_result;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let (form_area, result_area) = body_columns(body);
    render_form(frame, form_area, app.form(), app.generation());
    render_result(frame, result_area, app.generation());

    frame.render_widget(Footer::new().widget(footer), footer);
}
