use eframe::egui;

/// User intent decoded from raw keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    /// Single-character label shortcut, interpreted by `LabelPair::apply_key`.
    Key(char),
    Next,
    Previous,
}

pub(super) fn actions(events: &[egui::Event]) -> Vec<Action> {
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => out.extend(text.chars().map(Action::Key)),
            egui::Event::Key {
                key: egui::Key::ArrowRight,
                pressed: true,
                ..
            } => out.push(Action::Next),
            egui::Event::Key {
                key: egui::Key::ArrowLeft,
                pressed: true,
                ..
            } => out.push(Action::Previous),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotator_core::{Gender, LabelPair, Status};
    use rstest::rstest;

    #[rstest]
    #[case("m", vec![Action::Key('m')])]
    #[case("f2", vec![Action::Key('f'), Action::Key('2')])]
    #[case("", vec![])]
    fn text_events_become_key_actions(#[case] text: &str, #[case] expected: Vec<Action>) {
        let events = vec![egui::Event::Text(text.to_string())];
        assert_eq!(actions(&events), expected);
    }

    #[test]
    fn typed_shortcuts_drive_selection() {
        let events = vec![
            egui::Event::Text("F".into()),
            egui::Event::Text("4".into()),
            egui::Event::Text("q".into()),
        ];
        let mut selection = LabelPair::default();
        for action in actions(&events) {
            if let Action::Key(c) = action {
                selection.apply_key(c);
            }
        }
        assert_eq!(selection, LabelPair::new(Gender::Female, Status::Commoner));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let events = vec![egui::Event::Copy, egui::Event::Cut];
        assert!(actions(&events).is_empty());
    }
}
