//! Search input handling (pure state transitions).
//!
//! The search box is either closed, being edited, or closed with a term still
//! applied. Every edit yields the new query text so the caller can push it to
//! the table immediately. Cursor positions count chars, not bytes.

/// Search box state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search box and no term.
    #[default]
    Inactive,
    /// The user is editing `query`.
    Typing {
        /// Text typed so far.
        query: String,
        /// Cursor position in chars.
        cursor: usize,
    },
    /// Editing finished; `query` stays applied.
    Active {
        /// Applied term.
        query: String,
    },
}

impl SearchState {
    /// The term the table should filter on.
    pub fn query(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } | SearchState::Active { query } => query,
        }
    }

    /// Whether the box is being edited.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(query.len())
}

/// Insert `ch` at the cursor. No-op outside Typing.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the char before the cursor. No-op outside Typing or at 0.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one char left.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move right, saturating at the end of the query.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Open the search box. Re-opening an applied term edits it in place.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing => typing,
    }
}

/// Close the box and drop the term.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Close the box, keeping a non-blank term applied.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } if query.trim().is_empty() => SearchState::Inactive,
        SearchState::Typing { query, .. } => SearchState::Active { query },
        other => other,
    }
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
