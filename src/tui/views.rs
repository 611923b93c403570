//! Panel rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;

/// Render the whole front panel: memory on the left, status and
/// disassembly on the right, key help at the bottom.
pub(super) fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(44)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(columns[1]);

    render_memory(frame, app, columns[0]);
    render_status(frame, app, right[0]);
    render_instructions(frame, app, right[1]);
    render_help(frame, app, rows[1]);
}

fn changed_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn current_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Hex dump of the zero page and the program page, highlighting bytes
/// changed by the last step and the bytes of the current instruction.
fn render_memory(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = memory_page(app, 0x0000);
    lines.push(Line::default());
    lines.extend(memory_page(app, app.cpu.reset_vector()));

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Memory "));
    frame.render_widget(panel, area);
}

fn memory_page(app: &App, start: u16) -> Vec<Line<'static>> {
    let start = start & 0xFF00; // Align to the page boundary
    let current_len = app.cpu.disassemble(app.cpu.pc()).operation.size as u16;

    let mut lines = Vec::with_capacity(16);
    for row in 0..16u16 {
        let base = start + row * 16;
        let mut spans = vec![Span::raw(format!("${base:04X}: "))];
        for col in 0..16u16 {
            let addr = base + col;
            let value = app.cpu.read(addr);
            let text = format!("{value:02X}");

            let in_current = addr >= app.cpu.pc() && addr < app.cpu.pc().wrapping_add(current_len);
            let span = if app.previous_memory[addr as usize] != value {
                Span::styled(text, changed_style())
            } else if in_current {
                Span::styled(text, current_style())
            } else {
                Span::raw(text)
            };
            spans.push(span);
            if col < 15 {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Registers, flags and vectors.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let cpu = &app.cpu;
    let status = cpu.status();

    // One span per flag, coloured by state; bit 5 is unused.
    let names = ["N", "V", "-", "B", "D", "I", "Z", "C"];
    let mut flag_spans = vec![Span::raw("Status:  ")];
    let mut bit_spans = vec![Span::raw("         ")];
    for (i, name) in names.iter().enumerate() {
        let bit = status >> (7 - i) & 1;
        let span = if *name == "-" {
            Span::raw("-")
        } else if bit == 1 {
            Span::styled(*name, Style::default().fg(Color::Green))
        } else {
            Span::styled(*name, Style::default().fg(Color::Red))
        };
        flag_spans.push(span);
        flag_spans.push(Span::raw(" "));
        bit_spans.push(Span::raw(format!("{bit} ")));
    }
    bit_spans.push(Span::raw(format!(" ${status:02X}")));

    let lines = vec![
        Line::from(flag_spans),
        Line::from(bit_spans),
        Line::default(),
        Line::raw(format!("PC:  ${:04X}", cpu.pc())),
        Line::raw(format!("A:   ${:02X}  [{}]", cpu.a(), cpu.a())),
        Line::raw(format!("X:   ${:02X}  [{}]", cpu.x(), cpu.x())),
        Line::raw(format!("Y:   ${:02X}  [{}]", cpu.y(), cpu.y())),
        Line::raw(format!("SP:  ${:02X}", cpu.sp())),
        Line::default(),
        Line::raw(format!("Reset Vector:  ${:04X}", cpu.reset_vector())),
        Line::raw(format!("NMI Vector:    ${:04X}", cpu.nmi_vector())),
        Line::raw(format!("IRQ Vector:    ${:04X}", cpu.irq_vector())),
    ];

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(panel, area);
}

/// Disassembly listing starting from the lower of the reset vector and the
/// program counter, with the current instruction marked.
fn render_instructions(frame: &mut Frame, app: &App, area: Rect) {
    let cpu = &app.cpu;
    let rows = area.height.saturating_sub(2) as usize;
    let mut addr = cpu.reset_vector().min(cpu.pc());

    let mut lines = Vec::with_capacity(rows);
    for _ in 0..rows {
        let decoded = cpu.disassemble(addr);
        let bytes = decoded
            .bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        let line = format!("${addr:04X}: {bytes:<9} {}", decoded.text);

        if addr == cpu.pc() {
            lines.push(Line::styled(format!("> {line}"), current_style()));
        } else {
            lines.push(Line::raw(format!("  {line}")));
        }
        addr = addr.wrapping_add(decoded.operation.size as u16);
    }

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Instructions "));
    frame.render_widget(panel, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(
        " space/enter Step · e Run/Stop · r Reset · i IRQ · n NMI · q Quit",
    )];
    if app.running {
        spans.push(Span::styled(
            "   RUNNING",
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
