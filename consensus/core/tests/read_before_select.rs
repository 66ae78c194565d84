use consensus_core::config::params::current_network;

#[test]
#[should_panic(expected = "read before select_network")]
fn current_network_panics_before_selection() {
    current_network();
}
