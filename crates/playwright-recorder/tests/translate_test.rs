// Integration tests for action translation
//
// Tests cover:
// - End-to-end descriptors for navigate, click and select
// - Every action kind translates to a non-empty method and apiName
// - Purity (same input, same output)
// - Default and configured assertion timeouts
// - Every selector-bearing action resolves through the frame path, except
//   assertChecked which keeps the frame-local selector

mod common;

use playwright_recorder::{
    Action, ActionInContext, DEFAULT_EXPECT_TIMEOUT_MS, Error, KeyboardModifier, KeyboardModifiers,
    MouseButton, Position, TranslateOptions, Translator, translate,
};
use serde_json::json;

fn every_action() -> Vec<Action> {
    vec![
        Action::Navigate {
            url: "https://x/y".to_string(),
        },
        Action::OpenPage,
        Action::ClosePage,
        Action::Click {
            selector: "textarea".to_string(),
            modifiers: KeyboardModifiers::empty(),
            button: MouseButton::Left,
            click_count: 1,
            position: None,
        },
        Action::Press {
            selector: "textarea".to_string(),
            modifiers: KeyboardModifiers::empty().with(KeyboardModifier::Shift),
            key: "Enter".to_string(),
        },
        Action::Fill {
            selector: "textarea".to_string(),
            text: "test".to_string(),
        },
        Action::SetInputFiles {
            selector: "input[type=file]".to_string(),
            files: vec!["file-to-upload.txt".to_string()],
        },
        Action::Check {
            selector: "#agree".to_string(),
        },
        Action::Uncheck {
            selector: "#agree".to_string(),
        },
        Action::Select {
            selector: "select".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
        },
        Action::AssertChecked {
            selector: "#agree".to_string(),
            checked: true,
        },
        Action::AssertText {
            selector: "#msg".to_string(),
        },
        Action::AssertValue {
            selector: "#name".to_string(),
        },
        Action::AssertVisible {
            selector: "#btn".to_string(),
        },
        Action::AssertSnapshot {
            selector: "main".to_string(),
        },
    ]
}

#[test]
fn test_navigate_descriptor() {
    common::init_tracing();

    let call = translate(&ActionInContext::new(Action::Navigate {
        url: "https://x/y".to_string(),
    }))
    .expect("Failed to translate navigate");

    assert_eq!(
        serde_json::to_value(&call).unwrap(),
        json!({"method": "goto", "apiName": "page.goto", "params": {"url": "https://x/y"}})
    );
}

#[test]
fn test_click_descriptor() {
    common::init_tracing();

    let call = translate(&common::main_frame(Action::Click {
        selector: "textarea".to_string(),
        modifiers: KeyboardModifiers::empty(),
        button: MouseButton::Left,
        click_count: 1,
        position: None,
    }))
    .expect("Failed to translate click");

    assert_eq!(
        call.to_json(),
        json!({
            "method": "click",
            "apiName": "locator.click",
            "params": {
                "selector": "textarea",
                "strict": true,
                "modifiers": [],
                "button": "left",
                "clickCount": 1
            }
        })
    );
}

#[test]
fn test_select_descriptor() {
    common::init_tracing();

    let call = translate(&common::main_frame(Action::Select {
        selector: "select".to_string(),
        options: vec!["a".to_string(), "b".to_string()],
    }))
    .expect("Failed to translate select");

    assert_eq!(call.method, "selectOption");
    assert_eq!(
        call.params["options"],
        json!([{"value": "a"}, {"value": "b"}])
    );
}

#[test]
fn test_every_action_translates() {
    common::init_tracing();

    for action in every_action() {
        let name = action.name();
        let call = translate(&common::main_frame(action))
            .unwrap_or_else(|e| panic!("Failed to translate {}: {}", name, e));
        assert!(!call.method.is_empty(), "{} has empty method", name);
        assert!(!call.api_name.is_empty(), "{} has empty apiName", name);
        assert!(call.params.is_object(), "{} params not an object", name);
    }
}

#[test]
fn test_translation_is_pure() {
    common::init_tracing();

    let translator = Translator::default();
    for action in every_action() {
        let recorded = common::nested(&["#frame1", "iframe >> nth=0"], action);
        let first = translator.translate(&recorded).unwrap();
        let second = translator.translate(&recorded).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, translate(&recorded).unwrap());
    }
}

#[test]
fn test_selector_actions_are_strict() {
    common::init_tracing();

    for action in every_action() {
        if action.selector().is_none() || action.is_assertion() {
            continue;
        }
        let call = translate(&common::main_frame(action)).unwrap();
        assert_eq!(call.params["strict"], true, "{} not strict", call.method);
    }
}

#[test]
fn test_assertions_default_timeout() {
    common::init_tracing();

    for action in every_action().into_iter().filter(Action::is_assertion) {
        let call = translate(&common::main_frame(action)).unwrap();
        assert_eq!(call.method, "expect");
        assert_eq!(call.params["timeout"], DEFAULT_EXPECT_TIMEOUT_MS);
        assert_eq!(call.params["timeout"], 5000);
    }
}

#[test]
fn test_assertions_configured_timeout() {
    common::init_tracing();

    let translator = Translator::new(TranslateOptions::builder().expect_timeout(12_000).build());
    for action in every_action().into_iter().filter(Action::is_assertion) {
        let call = translator.translate(&common::main_frame(action)).unwrap();
        assert_eq!(call.params["timeout"], 12_000);
    }
}

#[test]
fn test_selector_actions_resolve_through_frame_path() {
    common::init_tracing();

    for action in every_action() {
        let Some(local) = action.selector().map(str::to_string) else {
            continue;
        };
        let name = action.name();
        let call = translate(&common::nested(&["iframe[name=f1]"], action))
            .unwrap_or_else(|e| panic!("Failed to translate {}: {}", name, e));

        let resolved = "iframe[name=f1] >> internal:control=enter-frame >> ";
        let expected = if name == "assertChecked" {
            local
        } else {
            format!("{}{}", resolved, local)
        };
        assert_eq!(
            call.params["selector"], expected,
            "{} selector not resolved as expected",
            name
        );
    }
}

#[test]
fn test_uncheck_descriptor_in_frame() {
    common::init_tracing();

    let call = translate(&common::nested(
        &["iframe[name=f1]"],
        Action::Uncheck {
            selector: "#agree".to_string(),
        },
    ))
    .expect("Failed to translate uncheck");

    assert_eq!(call.method, "uncheck");
    assert_eq!(call.api_name, "locator.uncheck");
    assert_eq!(
        call.params,
        json!({
            "selector": "iframe[name=f1] >> internal:control=enter-frame >> #agree",
            "strict": true
        })
    );
}

#[test]
fn test_assert_checked_and_visible_selector_asymmetry() {
    common::init_tracing();

    let frame_path = ["iframe[name=f1]"];
    let checked = translate(&common::nested(
        &frame_path,
        Action::AssertChecked {
            selector: "textarea".to_string(),
            checked: true,
        },
    ))
    .unwrap();
    let visible = translate(&common::nested(
        &frame_path,
        Action::AssertVisible {
            selector: "textarea".to_string(),
        },
    ))
    .unwrap();

    assert_eq!(checked.params["selector"], "textarea");
    assert_eq!(checked.params["isNot"], false);
    assert_eq!(
        visible.params["selector"],
        "iframe[name=f1] >> internal:control=enter-frame >> textarea"
    );
    assert_ne!(checked.params["selector"], visible.params["selector"]);
}

#[test]
fn test_press_key_chord_in_nested_frame() {
    common::init_tracing();

    let call = translate(&common::nested(
        &["#outer", "#inner"],
        Action::Press {
            selector: "input".to_string(),
            modifiers: [KeyboardModifier::Shift, KeyboardModifier::Control]
                .into_iter()
                .collect(),
            key: "A".to_string(),
        },
    ))
    .unwrap();

    assert_eq!(call.params["key"], "Control+Shift+A");
    assert_eq!(
        call.params["selector"],
        "#outer >> internal:control=enter-frame >> #inner >> internal:control=enter-frame >> input"
    );
}

#[test]
fn test_click_position_passthrough() {
    common::init_tracing();

    let call = translate(&common::main_frame(Action::Click {
        selector: "canvas".to_string(),
        modifiers: KeyboardModifiers::empty(),
        button: MouseButton::Right,
        click_count: 3,
        position: Some(Position { x: 10.0, y: 20.0 }),
    }))
    .unwrap();

    assert_eq!(call.params["button"], "right");
    assert_eq!(call.params["clickCount"], 3);
    assert_eq!(call.params["position"], json!({"x": 10.0, "y": 20.0}));
}

#[test]
fn test_missing_frame_fails_only_for_selector_actions() {
    common::init_tracing();

    for action in every_action() {
        let needs_frame = action.selector().is_some();
        let name = action.name();
        let result = translate(&ActionInContext::new(action));
        if needs_frame {
            assert!(
                matches!(result, Err(Error::InvalidContext(ref n)) if n == name),
                "{} should need a frame",
                name
            );
        } else {
            assert!(result.is_ok(), "{} should not need a frame", name);
        }
    }
}

#[test]
fn test_translator_is_shareable_across_threads() {
    common::init_tracing();

    let translator = std::sync::Arc::new(Translator::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = translator.clone();
            std::thread::spawn(move || {
                translator
                    .translate(&common::main_frame(Action::Fill {
                        selector: "textarea".to_string(),
                        text: format!("value {}", i),
                    }))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let call = handle.join().expect("Translator thread panicked");
        assert_eq!(call.params["value"], format!("value {}", i));
    }
}
