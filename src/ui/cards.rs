//! Card layouts for the view rows.
//!
//! Every card is a fixed block of lines followed by a blank separator, so
//! scrolling works in whole cards.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::helpers::{single_line, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_STAT};
use crate::models::{EnrichedPost, UserWithCount};

const INDENT: &str = "   ";

/// Lines for one top user: rank and name, post count, avatar.
pub fn user_card(rank: usize, row: &UserWithCount, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(INDENT.len());
    vec![
        Line::from(vec![
            Span::styled(format!("#{:<2}", rank), Style::default().fg(COLOR_DIM)),
            Span::styled(
                truncate_to_width(&row.user.name, inner),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("Posts: {}", row.post_count), Style::default().fg(COLOR_STAT)),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                truncate_to_width(&row.profile_image, inner),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::default(),
    ]
}

/// Lines for one post: author, content, comment count, image.
pub fn post_card(post: &EnrichedPost, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(INDENT.len());
    vec![
        Line::from(Span::styled(
            truncate_to_width(&post.user.name, width),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(INDENT),
            Span::raw(truncate_to_width(&single_line(&post.post.content), inner)),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("Comments: {}", post.comment_count),
                Style::default().fg(COLOR_STAT),
            ),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(truncate_to_width(&post.image_url, inner), Style::default().fg(COLOR_DIM)),
        ]),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, User};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_user_card() {
        let row = UserWithCount {
            user: User::new("1", "Alice"),
            post_count: 2,
            profile_image: "https://i.pravatar.cc/150?img=3".into(),
        };
        let lines = text(&user_card(1, &row, 60));
        assert_eq!(lines[0], "#1 Alice");
        assert_eq!(lines[1], "   Posts: 2");
        assert_eq!(lines[2], "   https://i.pravatar.cc/150?img=3");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_post_card_flattens_and_truncates_content() {
        let post = EnrichedPost {
            post: Post::new(7, 1, "line one\nline two is rather long"),
            user: User::new("1", "Alice"),
            comment_count: 4,
            image_url: "https://picsum.photos/400/300".into(),
        };
        let lines = text(&post_card(&post, 20));
        assert_eq!(lines[0], "Alice");
        assert_eq!(lines[1], "   line one line ...");
        assert_eq!(lines[2], "   Comments: 4");
        assert_eq!(lines.len(), 5);
    }
}
