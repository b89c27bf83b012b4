//! Border glyph families for table decoration.

/// Border style for the rendered table.
///
/// Every style keeps the three horizontal line kinds (top, row separator,
/// bottom) visually distinct so pages read as self-contained blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

/// Left, junction, and right glyphs for one horizontal line kind.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineGlyphs {
    pub(crate) left: char,
    pub(crate) middle: char,
    pub(crate) right: char,
}

/// The full glyph set for one border style.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub(crate) horizontal: char,
    pub(crate) vertical: char,
    pub(crate) top: LineGlyphs,
    pub(crate) middle: LineGlyphs,
    pub(crate) bottom: LineGlyphs,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: LineGlyphs {
                    left: '+',
                    middle: '+',
                    right: '+',
                },
                middle: LineGlyphs {
                    left: '+',
                    middle: '+',
                    right: '+',
                },
                bottom: LineGlyphs {
                    left: '+',
                    middle: '+',
                    right: '+',
                },
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: LineGlyphs {
                    left: '┌',
                    middle: '┬',
                    right: '┐',
                },
                middle: LineGlyphs {
                    left: '├',
                    middle: '┼',
                    right: '┤',
                },
                bottom: LineGlyphs {
                    left: '└',
                    middle: '┴',
                    right: '┘',
                },
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: LineGlyphs {
                    left: '┏',
                    middle: '┳',
                    right: '┓',
                },
                middle: LineGlyphs {
                    left: '┣',
                    middle: '╋',
                    right: '┫',
                },
                bottom: LineGlyphs {
                    left: '┗',
                    middle: '┻',
                    right: '┛',
                },
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: LineGlyphs {
                    left: '╔',
                    middle: '╦',
                    right: '╗',
                },
                middle: LineGlyphs {
                    left: '╠',
                    middle: '╬',
                    right: '╣',
                },
                bottom: LineGlyphs {
                    left: '╚',
                    middle: '╩',
                    right: '╝',
                },
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: LineGlyphs {
                    left: '╭',
                    middle: '┬',
                    right: '╮',
                },
                middle: LineGlyphs {
                    left: '├',
                    middle: '┼',
                    right: '┤',
                },
                bottom: LineGlyphs {
                    left: '╰',
                    middle: '┴',
                    right: '╯',
                },
            },
        }
    }
}
