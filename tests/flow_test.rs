use payproof::domain::flow::{FlowState, Step};
use payproof::domain::method::PaymentMethod;

#[test]
fn test_full_chain_ordinals() {
    let mut flow = FlowState::new();
    let mut seen = vec![flow.step().ordinal()];

    flow.select_method(PaymentMethod::Dana);
    seen.push(flow.step().ordinal());
    flow.confirm_payment();
    seen.push(flow.step().ordinal());
    flow.complete_upload();
    seen.push(flow.step().ordinal());

    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(flow.selected_method(), Some(PaymentMethod::Dana));
}

#[test]
fn test_back_walks_the_chain_in_reverse() {
    let mut flow = FlowState::new();
    flow.select_method(PaymentMethod::Qris);
    flow.confirm_payment();
    flow.complete_upload();

    for expected in [2, 1, 0, 0, 0] {
        flow.back();
        assert_eq!(flow.step().ordinal(), expected);
        assert_eq!(flow.selected_method(), Some(PaymentMethod::Qris));
    }
}

#[test]
fn test_reset_is_the_only_exit_from_terminal_step() {
    let mut flow = FlowState::new();
    flow.select_method(PaymentMethod::Dana);
    flow.confirm_payment();
    flow.complete_upload();
    assert_eq!(flow.step(), Step::Done);

    // Forward transitions are exhausted at the terminal step
    flow.confirm_payment();
    flow.complete_upload();
    assert_eq!(flow.step(), Step::Done);

    flow.reset();
    assert_eq!(flow.step(), Step::SelectMethod);
    assert_eq!(flow.selected_method(), None);
}
