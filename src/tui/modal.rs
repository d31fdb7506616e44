// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// Only one modal can be open at a time, which also gives the per-row share
// popovers their mutual exclusion for free.

use crate::share::ShareTarget;
use crossterm::event::KeyCode;

/// Destructive operations that wait behind a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteArticle(i64),
    DeleteComment { article_id: i64, comment_id: i64 },
}

/// Actions returned by modal input handling
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// The confirmation was accepted; run the pending action
    Confirm(PendingAction),
    /// Copy the given text to the clipboard (share popover)
    Copy { label: &'static str, text: String },
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Yes/no gate in front of a destructive action
    Confirm {
        message: String,
        action: PendingAction,
    },
    /// Blocking notification for failed writes; any key dismisses
    Notice(String),
    /// Share popover for one article: network links plus plain copy-link
    Share {
        title: String,
        url: String,
        links: Vec<(ShareTarget, String)>,
        selected: usize,
    },
}

impl Modal {
    pub fn confirm(message: impl Into<String>, action: PendingAction) -> Self {
        Modal::Confirm {
            message: message.into(),
            action,
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Modal::Notice(message.into())
    }

    pub fn share(title: impl Into<String>, url: String, links: Vec<(ShareTarget, String)>) -> Self {
        Modal::Share {
            title: title.into(),
            url,
            links,
            selected: 0,
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Confirm { action, .. } => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::Confirm(*action)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
            // Blocking notice: acknowledged by any key
            Modal::Notice(_) => ModalAction::Close,
            Modal::Share {
                url,
                links,
                selected,
                ..
            } => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected = selected.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *selected = (*selected + 1).min(links.len().saturating_sub(1));
                    ModalAction::None
                }
                KeyCode::Enter => {
                    let (target, link) = &links[*selected];
                    ModalAction::Copy {
                        label: target.label(),
                        text: link.clone(),
                    }
                }
                // Plain copy of the canonical article URL
                KeyCode::Char('y') | KeyCode::Char('c') => ModalAction::Copy {
                    label: "link",
                    text: url.clone(),
                },
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_requires_explicit_yes() {
        let mut modal = Modal::confirm("Delete?", PendingAction::DeleteArticle(4));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('x')),
            ModalAction::None
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Esc),
            ModalAction::Close
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('y')),
            ModalAction::Confirm(PendingAction::DeleteArticle(4))
        ));
    }

    #[test]
    fn notice_dismisses_on_any_key() {
        let mut modal = Modal::notice("Save failed");
        assert!(matches!(
            modal.handle_input(KeyCode::Char('z')),
            ModalAction::Close
        ));
    }

    #[test]
    fn share_enter_copies_selected_network_link() {
        let links = vec![
            (ShareTarget::Twitter, "https://t".to_string()),
            (ShareTarget::Facebook, "https://f".to_string()),
        ];
        let mut modal = Modal::share("Title", "https://site/blog/1".to_string(), links);

        modal.handle_input(KeyCode::Down);
        match modal.handle_input(KeyCode::Enter) {
            ModalAction::Copy { label, text } => {
                assert_eq!(label, "Facebook");
                assert_eq!(text, "https://f");
            }
            other => panic!("expected Copy, got {other:?}"),
        }

        match modal.handle_input(KeyCode::Char('y')) {
            ModalAction::Copy { label, text } => {
                assert_eq!(label, "link");
                assert_eq!(text, "https://site/blog/1");
            }
            other => panic!("expected Copy, got {other:?}"),
        }
    }
}
