//! Tutorial Markdown Renderer
//!
//! Extends pulldown-cmark with:
//! - Syntax highlighting of fenced code blocks (syntect)
//! - Callout styling: block quotes opening with `**Note**` render as
//!   `<blockquote class="callout">`

use pulldown_cmark::{Parser, Options, Event, CowStr, Tag, TagEnd, CodeBlockKind, html::push_html};
use std::sync::OnceLock;
use syntect::parsing::SyntaxSet;
use syntect::highlighting::{ThemeSet, Theme};
use syntect::html::highlighted_html_for_string;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Parse markdown with all extensions enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Whether a block quote body starts with a bold "Note"
fn opens_with_note(rest: &[Event]) -> bool {
    matches!(
        rest,
        [Event::Start(Tag::Paragraph), Event::Start(Tag::Strong), Event::Text(t), ..] if &**t == "Note"
    )
}

/// Replace code blocks with highlighted HTML and tag note block quotes
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let input: Vec<Event<'a>> = parser.collect();
    let mut events = Vec::new();
    let mut state = State::Normal;
    // One entry per open block quote: is it a callout
    let mut callouts = Vec::new();

    for (i, event) in input.iter().cloned().enumerate() {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Start(Tag::BlockQuote) => {
                    let callout = opens_with_note(&input[i + 1..]);
                    callouts.push(callout);
                    if callout {
                        events.push(Event::Html(CowStr::from("<blockquote class=\"callout\">\n")));
                    } else {
                        events.push(Event::Start(Tag::BlockQuote));
                    }
                }
                Event::End(TagEnd::BlockQuote) => {
                    if callouts.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</blockquote>\n")));
                    } else {
                        events.push(Event::End(TagEnd::BlockQuote));
                    }
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let fallback = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else {
        return fallback();
    };
    let ss = get_syntax_set();

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| fallback())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
