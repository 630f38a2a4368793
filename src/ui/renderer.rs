/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into `front` buffer (array of Cell)
///   2. Compare each cell with `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// Screen layout (rows):
///   0        header
///   2..h-3   scrollback, bottom-aligned to the newest line
///   h-3      prompt
///   h-1      footer tip

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::line::LineKind;
use crate::domain::theme::Theme;
use crate::session::state::Session;
use super::palette::Palette;

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: [u8; 4],
    ch_len: u8,
    fg: Color,
    bg: Color,
    wide: bool, // occupies 2 terminal columns
    cont: bool, // right half of a wide char (skip render)
}

impl Cell {
    /// Sentinel used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell {
        ch: [b'?', 0, 0, 0],
        ch_len: 1,
        fg: Color::Magenta,
        bg: Color::Magenta,
        wide: false,
        cont: false,
    };

    const fn blank(bg: Color) -> Self {
        Cell {
            ch: [b' ', 0, 0, 0],
            ch_len: 1,
            fg: Color::White,
            bg,
            wide: false,
            cont: false,
        }
    }

    fn from_char(c: char, fg: Color, bg: Color, wide: bool) -> Self {
        let mut cell = Self::blank(bg);
        cell.ch_len = c.encode_utf8(&mut cell.ch).len() as u8;
        cell.fg = fg;
        cell.wide = wide;
        cell
    }

    fn wide_cont(bg: Color) -> Self {
        Cell {
            ch: [0; 4],
            ch_len: 0,
            fg: Color::White,
            bg,
            wide: false,
            cont: true,
        }
    }

    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.ch[..self.ch_len as usize]).unwrap_or("?")
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::INVALID; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::INVALID; w * h];
        }
    }

    fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::INVALID
        }
    }

    /// Write a string at (x, y). Wide chars take two columns; a wide char
    /// that would straddle the right edge is dropped. Returns the column
    /// after the last written cell.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) -> usize {
        let mut cx = x;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if cx + w > self.width {
                break;
            }
            if w == 2 {
                self.set(cx, y, Cell::from_char(ch, fg, bg, true));
                self.set(cx + 1, y, Cell::wide_cont(bg));
            } else {
                self.set(cx, y, Cell::from_char(ch, fg, bg, false));
            }
            cx += w;
        }
        cx
    }

    /// Paint a full row background.
    fn fill_row(&mut self, y: usize, bg: Color) {
        for x in 0..self.width {
            self.set(x, y, Cell::blank(bg));
        }
    }
}

// ── Layout ──

const HEADER_ROW: usize = 0;
const SCROLL_TOP: usize = 2;
/// Rows below the scrollback: prompt, gap, footer.
const BOTTOM_ROWS: usize = 3;
const MARGIN: usize = 1;

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "type a command (help)";
const FOOTER: &str = "Tip: press Tab for completion, ↑/↓ for history.";
const LOADING: &str = "Loading...";
const TYPING_CURSOR: char = '▌';

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_theme: Option<Theme>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_theme: None,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        self.back.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, session: &Session) -> io::Result<()> {
        let palette = Palette::for_theme(session.theme());

        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        let resized = tw as usize != self.term_w || th as usize != self.term_h;
        if resized {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
        }

        // Theme switch or resize → full repaint in the new background.
        if resized || self.last_theme != Some(session.theme()) {
            self.back.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(palette.bg), Clear(ClearType::All))?;
            self.last_theme = Some(session.theme());
        }

        self.front.fill(Cell::blank(palette.bg));
        self.compose_header(session, &palette);
        self.compose_scrollback(session, &palette);
        self.compose_prompt(session, &palette);
        self.compose_footer(&palette);

        self.flush_diff(&palette)?;
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self, palette: &Palette) -> io::Result<()> {
        let mut last_fg = palette.text;
        let mut last_bg = palette.bg;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        queue!(self.writer,
            SetForegroundColor(last_fg),
            SetBackgroundColor(last_bg),
        )?;

        for y in 0..self.front.height {
            let mut x = 0;
            while x < self.front.width {
                let cell = self.front.get(x, y);
                let prev = self.back.get(x, y);

                if cell.cont {
                    if cell != prev { need_move = true; }
                    x += 1;
                    continue;
                }

                let cont_changed = cell.wide
                    && x + 1 < self.front.width
                    && self.front.get(x + 1, y) != self.back.get(x + 1, y);

                if cell == prev && !cont_changed {
                    need_move = true;
                    x += 1;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }

                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }

                queue!(self.writer, Print(cell.as_str()))?;

                if cell.wide {
                    last_x = x + 1;
                    x += 2;
                } else {
                    last_x = x;
                    x += 1;
                }
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── Compose: build front buffer content ──

    fn compose_header(&mut self, session: &Session, p: &Palette) {
        self.front.fill_row(HEADER_ROW, p.header_bg);
        let title = format!(
            " termfolio · enoch@portfolio:~ · theme: {} ",
            session.theme().name()
        );
        self.front.put_str(0, HEADER_ROW, &title, p.header_fg, p.header_bg);
    }

    fn compose_scrollback(&mut self, session: &Session, p: &Palette) {
        let view_h = self.term_h.saturating_sub(SCROLL_TOP + BOTTOM_ROWS);
        let wrap_w = self.term_w.saturating_sub(MARGIN * 2);
        if view_h == 0 || wrap_w == 0 {
            return;
        }

        let mut rows: Vec<(String, Color)> = Vec::new();
        for line in session.lines() {
            let fg = p.line(line.kind());
            rows.extend(wrap(line.text(), wrap_w).into_iter().map(|r| (r, fg)));
        }

        if session.lines().is_empty() {
            if let Some(typed) = session.intro_text() {
                let text = if typed.is_empty() {
                    LOADING.to_string()
                } else {
                    format!("{typed}{TYPING_CURSOR}")
                };
                let fg = if typed.is_empty() { p.dim } else { p.line(LineKind::Info) };
                rows.extend(wrap(&text, wrap_w).into_iter().map(|r| (r, fg)));
            }
        }

        // Auto-scroll: newest row sits on the last scrollback row.
        let skip = rows.len().saturating_sub(view_h);
        for (i, (text, fg)) in rows.iter().skip(skip).enumerate() {
            self.front.put_str(MARGIN, SCROLL_TOP + i, text, *fg, p.bg);
        }
    }

    fn compose_prompt(&mut self, session: &Session, p: &Palette) {
        let Some(row) = self.term_h.checked_sub(BOTTOM_ROWS) else { return };
        if row < SCROLL_TOP {
            return;
        }

        let x = self.front.put_str(MARGIN, row, PROMPT, p.command, p.bg);
        let prompt = session.prompt();
        let avail = self.term_w.saturating_sub(x + MARGIN);
        if avail == 0 {
            return;
        }

        if prompt.is_empty() {
            self.front.set(x, row, Cell::from_char(' ', p.bg, p.text, false));
            self.front.put_str(x + 1, row, PLACEHOLDER, p.dim, p.bg);
            return;
        }

        let chars: Vec<char> = prompt.text().chars().collect();
        let start = scroll_start(&chars, prompt.caret(), avail);
        let mut cx = x;
        for (i, &ch) in chars.iter().enumerate().skip(start) {
            let w = col_width(ch);
            if cx + w > x + avail {
                break;
            }
            let (fg, bg) = if i == prompt.caret() { (p.bg, p.text) } else { (p.text, p.bg) };
            self.front.put_str(cx, row, &ch.to_string(), fg, bg);
            cx += w;
        }
        if prompt.caret() >= chars.len() && cx < x + avail {
            self.front.set(cx, row, Cell::from_char(' ', p.bg, p.text, false));
        }
    }

    fn compose_footer(&mut self, p: &Palette) {
        let Some(row) = self.term_h.checked_sub(1) else { return };
        if row <= SCROLL_TOP {
            return;
        }
        self.front.put_str(MARGIN, row, FOOTER, p.dim, p.bg);
    }
}

/// Columns a prompt char takes. Zero-width chars still get one cell so
/// the caret can sit on them.
fn col_width(ch: char) -> usize {
    ch.width().unwrap_or(0).max(1)
}

/// First char index to draw so that the caret cell, and as much text
/// before it as fits, lands inside `avail` columns.
fn scroll_start(chars: &[char], caret: usize, avail: usize) -> usize {
    let mut used = chars.get(caret).map_or(1, |&c| col_width(c));
    let mut start = caret;
    while start > 0 {
        let w = col_width(chars[start - 1]);
        if used + w > avail {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// at char boundaries. An empty string yields one empty row. A glyph
/// wider than `width` can never fit and is dropped.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    if width == 0 {
        return rows;
    }

    let mut cur = String::new();
    let mut cur_w = 0;

    for word in text.split(' ') {
        let word_w = word.width();

        if cur_w > 0 && cur_w + 1 + word_w <= width {
            cur.push(' ');
            cur.push_str(word);
            cur_w += 1 + word_w;
            continue;
        }
        if cur_w > 0 || !cur.is_empty() {
            rows.push(std::mem::take(&mut cur));
            cur_w = 0;
        }

        if word_w <= width {
            cur.push_str(word);
            cur_w = word_w;
            continue;
        }

        // Hard-split an oversized word.
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if w > width {
                continue;
            }
            if cur_w + w > width && !cur.is_empty() {
                rows.push(std::mem::take(&mut cur));
                cur_w = 0;
            }
            cur.push(ch);
            cur_w += w;
        }
    }
    rows.push(cur);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::session::state::SessionConfig;

    #[test]
    fn short_text_is_one_row() {
        assert_eq!(wrap("help me", 20), ["help me"]);
        assert_eq!(wrap("", 20), [""]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap("aaa bbb ccc", 7), ["aaa bbb", "ccc"]);
        assert_eq!(wrap("aaa bbb ccc", 3), ["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn long_word_is_split() {
        assert_eq!(wrap("abcdefgh", 3), ["abc", "def", "gh"]);
        assert_eq!(wrap("x abcdef", 4), ["x", "abcd", "ef"]);
    }

    #[test]
    fn wide_glyphs_count_double() {
        // "🎉" is two columns wide.
        assert_eq!(wrap("🎉 Hired!", 3), ["🎉", "Hir", "ed!"]);
        assert_eq!(wrap("🎉 Hi", 5), ["🎉 Hi"]);
    }

    #[test]
    fn rows_never_exceed_width() {
        let texts = [
            "Freelance CRM — Client & project dashboard, invoice PDF, protected sessions",
            "🎉 Hired! Redirecting to interview scheduler...",
            "界界界 mixed 界a界b 🎉🎉",
        ];
        for text in texts {
            for w in 1..40 {
                for row in wrap(text, w) {
                    assert!(row.width() <= w, "{row:?} wider than {w}");
                }
            }
        }
    }

    #[test]
    fn glyph_wider_than_width_is_dropped() {
        assert_eq!(wrap("🎉ab", 1), ["a", "b"]);
        assert_eq!(wrap("界界", 1), [""]);
    }

    #[test]
    fn scroll_start_counts_columns() {
        let wide: Vec<char> = "界".repeat(20).chars().collect();
        // caret at end needs 1 column; four 2-column glyphs fill the rest.
        assert_eq!(scroll_start(&wide, 20, 10), 16);
        assert_eq!(scroll_start(&wide, 0, 10), 0);

        let narrow: Vec<char> = "abcdef".chars().collect();
        assert_eq!(scroll_start(&narrow, 6, 4), 3);
        assert_eq!(scroll_start(&narrow, 2, 10), 0);
    }

    // ── Compose ──

    fn renderer(w: usize, h: usize, session: &Session) -> (Renderer, Palette) {
        let mut r = Renderer::new();
        r.term_w = w;
        r.term_h = h;
        r.front.resize(w, h);
        let p = Palette::for_theme(session.theme());
        r.front.fill(Cell::blank(p.bg));
        (r, p)
    }

    fn row_text(fb: &FrameBuffer, y: usize) -> String {
        (0..fb.width)
            .map(|x| fb.get(x, y))
            .filter(|c| !c.cont)
            .map(|c| c.as_str().to_string())
            .collect()
    }

    fn ready_session(now: Instant) -> Session {
        let cfg = SessionConfig { intro: false, ..SessionConfig::default() };
        let mut s = Session::new(&cfg, now);
        s.tick(now);
        s
    }

    #[test]
    fn scrollback_shows_newest_lines() {
        let now = Instant::now();
        let mut s = ready_session(now);
        for i in 0..10 {
            s.run(&format!("c{i}"), now);
        }
        let (mut r, p) = renderer(80, 10, &s);
        r.compose_scrollback(&s, &p);

        // 10 rows - header/gap - prompt/gap/footer = 5 scrollback rows.
        let last = SCROLL_TOP + 4;
        assert!(row_text(&r.front, last).trim().starts_with("Command not found: c9."));
        assert_eq!(row_text(&r.front, last - 1).trim(), "$ c9");
        assert!(row_text(&r.front, SCROLL_TOP).trim().starts_with("Command not found: c7."));
        assert_eq!(row_text(&r.front, last + 1).trim(), "");
    }

    #[test]
    fn intro_shows_loading_then_typed_prefix() {
        let t0 = Instant::now();
        let mut s = Session::new(&SessionConfig::default(), t0);

        let (mut r, p) = renderer(80, 10, &s);
        r.compose_scrollback(&s, &p);
        assert_eq!(row_text(&r.front, SCROLL_TOP).trim(), LOADING);

        s.tick(t0 + Duration::from_millis(15) * 3);
        let (mut r, p) = renderer(80, 10, &s);
        r.compose_scrollback(&s, &p);
        assert_eq!(row_text(&r.front, SCROLL_TOP).trim(), format!("Wel{TYPING_CURSOR}"));
    }

    #[test]
    fn empty_prompt_shows_placeholder() {
        let s = ready_session(Instant::now());
        let (mut r, p) = renderer(40, 10, &s);
        r.compose_prompt(&s, &p);
        let row = row_text(&r.front, 10 - BOTTOM_ROWS);
        assert!(row.contains(PROMPT.trim()));
        assert!(row.contains(PLACEHOLDER));
    }

    #[test]
    fn caret_stays_visible_with_wide_input() {
        let mut s = ready_session(Instant::now());
        s.prompt_mut().set(&"界".repeat(20));
        let (mut r, p) = renderer(14, 10, &s);
        r.compose_prompt(&s, &p);

        let y = 10 - BOTTOM_ROWS;
        let caret_cells = (0..r.front.width)
            .filter(|&x| r.front.get(x, y).bg == p.text)
            .count();
        assert_eq!(caret_cells, 1);
        assert!(row_text(&r.front, y).contains("界界界界"));
    }

    #[test]
    fn header_names_active_theme() {
        let now = Instant::now();
        let mut s = ready_session(now);
        s.run("theme light", now);
        let (mut r, p) = renderer(60, 10, &s);
        r.compose_header(&s, &p);
        assert!(row_text(&r.front, HEADER_ROW).contains("theme: light"));
    }

    #[test]
    fn put_str_handles_wide_chars() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.fill(Cell::blank(Color::Black));
        let end = fb.put_str(0, 0, "🎉ab", Color::Green, Color::Black);
        assert_eq!(end, 4);
        assert!(fb.get(0, 0).wide);
        assert!(fb.get(1, 0).cont);
        assert_eq!(fb.get(2, 0).as_str(), "a");
        assert_eq!(fb.get(3, 0).as_str(), "b");
    }

    #[test]
    fn put_str_drops_straddling_wide_char() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.fill(Cell::blank(Color::Black));
        let end = fb.put_str(0, 0, "ab🎉", Color::Green, Color::Black);
        assert_eq!(end, 2);
        assert_eq!(fb.get(2, 0).as_str(), " ");
    }
}
