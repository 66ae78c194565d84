//! Selection state machine, exercised in its own process: the selected
//! network is process-wide state, so ordering across tests in one binary
//! would be unreliable.

use consensus_core::config::params::{current_network, select_network};
use consensus_core::errors::ParamsError;
use consensus_core::network::ChainType;

#[test]
fn select_once_then_read_many() {
    let selected = select_network(ChainType::Test).unwrap();
    assert_eq!(selected.chain, ChainType::Test);

    // every read returns the same instance handed out by select
    assert!(std::ptr::eq(selected, current_network()));
    assert!(std::ptr::eq(current_network(), current_network()));

    // reselection is rejected, whether to the same chain or another
    assert_eq!(select_network(ChainType::Test).unwrap_err(), ParamsError::AlreadySelected);
    assert_eq!(select_network(ChainType::Main).unwrap_err(), ParamsError::AlreadySelected);

    // the active set is unchanged after rejected attempts
    assert_eq!(current_network().chain, ChainType::Test);
    assert_eq!(current_network().default_port, 16663);
}
