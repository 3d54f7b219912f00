//! End-to-end submissions against the headless form surface.

use regflow::{
    AlertSlot, FieldId, FlowConfig, FlowState, FormError, FormSurface, HeadlessForm,
    RegistrationFlow, SubmitOutcome,
};
use std::sync::Arc;
use std::time::Duration;

fn fixture(submit_delay_ms: u64, alert_ttl_ms: u64) -> (Arc<HeadlessForm>, RegistrationFlow) {
    let surface = Arc::new(HeadlessForm::new());
    let config = FlowConfig {
        submit_delay: Duration::from_millis(submit_delay_ms),
        alert_ttl: Duration::from_millis(alert_ttl_ms),
        ..FlowConfig::default()
    };
    let flow = RegistrationFlow::new(surface.clone(), config);
    (surface, flow)
}

#[tokio::test]
async fn empty_name_attaches_alert_to_name_field() {
    let (surface, flow) = fixture(10, 5_000);
    surface.fill("", "ada@example.com", "Engine#1", true);

    let outcome = flow.submit().await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::MissingName)));
    assert_eq!(
        surface.alert_lines(AlertSlot::Field(FieldId::Name)),
        Some(vec!["Please enter your name".to_string()])
    );
    assert!(surface.is_marked(FieldId::Name));
    assert_eq!(surface.focused(), Some(FieldId::Name));
    assert_eq!(flow.state(), FlowState::Idle);
}

#[tokio::test]
async fn invalid_email_surfaces_the_format_message() {
    let (surface, flow) = fixture(10, 5_000);
    surface.fill("Ada", "not-an-address", "Engine#1", true);

    flow.submit().await.unwrap();

    assert_eq!(
        surface.alert_lines(AlertSlot::Field(FieldId::Email)),
        Some(vec!["Please enter a valid email address".to_string()])
    );
}

#[tokio::test]
async fn policy_violations_render_one_line_per_rule() {
    let (surface, flow) = fixture(10, 20);
    surface.fill("Ada", "ada@example.com", "ab", true);

    let outcome = flow.submit().await.unwrap();

    match outcome {
        SubmitOutcome::Rejected(FormError::PolicyUnmet(violations)) => {
            assert_eq!(violations.len(), 4)
        }
        other => panic!("expected policy rejection, got {other:?}"),
    }

    let lines = surface
        .alert_lines(AlertSlot::Field(FieldId::Password))
        .expect("password alert missing");
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("• Password must be"));
    assert_eq!(surface.focused(), Some(FieldId::Password));

    // password alerts have no auto-expiry
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(surface
        .alert_lines(AlertSlot::Field(FieldId::Password))
        .is_some());
    assert!(surface.is_marked(FieldId::Password));
}

#[tokio::test]
async fn valid_submission_succeeds_and_resets_the_form() {
    let (surface, flow) = fixture(20, 5_000);
    surface.fill("  Ada Lovelace  ", "ada@example.com", "Engine#1", true);

    let outcome = flow.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Registered {
            name: "Ada Lovelace".to_string()
        }
    );

    let success = surface
        .alert_lines(AlertSlot::Success)
        .expect("success alert missing");
    assert_eq!(
        success,
        vec!["Registration successful! Welcome Ada Lovelace!".to_string()]
    );

    // form reset, busy indicator restored
    let input = surface.read_input();
    assert_eq!(input.name, "");
    assert_eq!(input.email, "");
    assert_eq!(input.password, "");
    assert!(!input.terms_accepted);
    assert_eq!(surface.busy_changes(), vec![true, false]);
    assert_eq!(flow.state(), FlowState::Idle);
}

#[tokio::test]
async fn resubmission_while_submitting_is_guarded() {
    let (surface, flow) = fixture(60, 5_000);
    surface.fill("Ada", "ada@example.com", "Engine#1", true);

    let flow = Arc::new(flow);
    let background = {
        let flow = flow.clone();
        tokio::spawn(async move { flow.submit().await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(flow.state(), FlowState::Submitting);

    let err = flow.submit().await.unwrap_err();
    assert!(err.to_string().contains("already in progress"));

    let outcome = background.await.unwrap().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Registered { .. }));
    assert_eq!(flow.state(), FlowState::Idle);
}

#[tokio::test]
async fn a_new_pass_clears_previous_alerts_first() {
    let (surface, flow) = fixture(10, 5_000);

    surface.fill("", "", "", false);
    flow.submit().await.unwrap();
    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Name)).is_some());

    surface.fill("Ada", "bad-address", "Engine#1", true);
    flow.submit().await.unwrap();

    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Name)).is_none());
    assert!(!surface.is_marked(FieldId::Name));
    assert_eq!(surface.alert_count(), 1);
    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Email)).is_some());
}

#[tokio::test]
async fn non_password_alerts_expire() {
    let (surface, flow) = fixture(10, 40);
    surface.fill("", "ada@example.com", "Engine#1", true);

    flow.submit().await.unwrap();
    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Name)).is_some());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Name)).is_none());
    assert!(!surface.is_marked(FieldId::Name));
}

#[tokio::test]
async fn refocusing_a_field_acknowledges_its_alert() {
    let (surface, flow) = fixture(10, 5_000);
    surface.fill("", "", "", false);
    flow.submit().await.unwrap();

    flow.field_focused(FieldId::Name);

    assert!(surface.alert_lines(AlertSlot::Field(FieldId::Name)).is_none());
    assert!(!surface.is_marked(FieldId::Name));
    assert!(surface.is_scaled(FieldId::Name));
}

#[tokio::test]
async fn success_alert_expires_like_any_non_password_alert() {
    let (surface, flow) = fixture(10, 40);
    surface.fill("Ada", "ada@example.com", "Engine#1", true);

    flow.submit().await.unwrap();
    assert!(surface.alert_lines(AlertSlot::Success).is_some());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(surface.alert_lines(AlertSlot::Success).is_none());
}
