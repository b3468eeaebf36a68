//! Directive block resolution
//!
//! Skeletons carry conditional regions written as
//! `<? if (NAME) { ?> ... <? } else { ?> ... <? } ?>` with the else part
//! optional. Resolution walks marker boundaries in one pass, so adjacent
//! blocks and brace characters inside guarded content cannot bleed into each
//! other the way chained pattern substitution would allow.

use crate::schema::ConditionSet;

/// A parsed `<? ... ?>` marker.
enum Marker<'a> {
    /// `<? if (NAME) { ?>`
    Open(&'a str),
    /// `<? } else { ?>`
    Else,
    /// `<? } ?>`
    Close,
}

/// Divider markers that can end a branch.
enum Divider {
    Else,
    Close,
}

/// A complete block located after its open marker.
struct Block<'a> {
    then_branch: &'a str,
    else_branch: Option<&'a str>,
    /// Byte offset just past the closing marker.
    end: usize,
}

/// Resolve every directive block in `doc` against `conditions`.
///
/// A true condition keeps the first branch, a false one keeps the else
/// branch or nothing. Condition names absent from the set read as false.
/// Markers that do not form a complete block pass through untouched.
pub fn resolve_directives(doc: &str, conditions: &ConditionSet) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut pos = 0;

    while let Some(found) = doc[pos..].find("<?") {
        let start = pos + found;
        out.push_str(&doc[pos..start]);

        match parse_marker(doc, start) {
            Some((Marker::Open(name), open_end)) => match scan_block(doc, open_end) {
                Some(block) => {
                    if conditions.is_true(name) {
                        out.push_str(block.then_branch);
                    } else if let Some(branch) = block.else_branch {
                        out.push_str(branch);
                    }
                    pos = block.end;
                }
                None => {
                    // Unterminated block; keep the open marker as written.
                    out.push_str(&doc[start..open_end]);
                    pos = open_end;
                }
            },
            // Stray else/close markers stay in the output.
            Some((Marker::Else, end)) | Some((Marker::Close, end)) => {
                out.push_str(&doc[start..end]);
                pos = end;
            }
            None => {
                out.push_str("<?");
                pos = start + 2;
            }
        }
    }

    out.push_str(&doc[pos..]);
    out
}

/// Locate the branches of a block whose content starts at `content_start`.
///
/// The first else or close marker ends the first branch; after an else, the
/// else branch runs to the next close marker. Returns None when the block
/// never closes.
fn scan_block(doc: &str, content_start: usize) -> Option<Block<'_>> {
    let (divider_start, divider, divider_end) = next_divider(doc, content_start)?;
    match divider {
        Divider::Close => Some(Block {
            then_branch: &doc[content_start..divider_start],
            else_branch: None,
            end: divider_end,
        }),
        Divider::Else => {
            let (close_start, close, close_end) = next_divider(doc, divider_end)?;
            match close {
                Divider::Close => Some(Block {
                    then_branch: &doc[content_start..divider_start],
                    else_branch: Some(&doc[divider_end..close_start]),
                    end: close_end,
                }),
                // Two else markers with no close between them.
                Divider::Else => None,
            }
        }
    }
}

/// Next else or close marker at or after `from`.
///
/// Open markers and non-marker `<?` sequences are skipped as content; blocks
/// do not nest.
fn next_divider(doc: &str, mut from: usize) -> Option<(usize, Divider, usize)> {
    while let Some(found) = doc[from..].find("<?") {
        let start = from + found;
        match parse_marker(doc, start) {
            Some((Marker::Else, end)) => return Some((start, Divider::Else, end)),
            Some((Marker::Close, end)) => return Some((start, Divider::Close, end)),
            Some((Marker::Open(_), end)) => from = end,
            None => from = start + 2,
        }
    }
    None
}

/// Parse the marker whose `<?` sits at `start`.
///
/// Returns the marker and the offset just past its `?>`, or None when the
/// text is not a directive marker. Whitespace between tokens is free-form.
fn parse_marker(doc: &str, start: usize) -> Option<(Marker<'_>, usize)> {
    let mut cur = Cursor {
        doc,
        pos: start + 2,
    };
    cur.skip_ws();

    if cur.eat("}") {
        cur.skip_ws();
        if cur.eat("?>") {
            return Some((Marker::Close, cur.pos));
        }
        if cur.eat("else") {
            cur.skip_ws();
            if cur.eat("{") {
                cur.skip_ws();
                if cur.eat("?>") {
                    return Some((Marker::Else, cur.pos));
                }
            }
        }
        return None;
    }

    if cur.eat("if") {
        cur.skip_ws();
        if !cur.eat("(") {
            return None;
        }
        cur.skip_ws();
        let name = cur.take_name()?;
        cur.skip_ws();
        if cur.eat(")") {
            cur.skip_ws();
            if cur.eat("{") {
                cur.skip_ws();
                if cur.eat("?>") {
                    return Some((Marker::Open(name), cur.pos));
                }
            }
        }
        return None;
    }

    None
}

struct Cursor<'a> {
    doc: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn skip_ws(&mut self) {
        for ch in self.doc[self.pos..].chars() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.doc[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Consume a condition name: ASCII letters, digits and underscores.
    fn take_name(&mut self) -> Option<&'a str> {
        let rest = &self.doc[self.pos..];
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }
}
