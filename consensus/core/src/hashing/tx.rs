use super::write_var_int;
use crate::script::Script;
use crate::tx::Transaction;
use crate::Hash;

/// Serializes a transaction into its wire form:
/// `version || time || inputs || outputs || lock_time`. The timestamp
/// directly after the version is the peercoin-lineage layout this chain
/// inherited.
pub fn serialize(tx: &Transaction) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&tx.version.to_le_bytes());
    bytes.extend_from_slice(&tx.time.to_le_bytes());

    write_var_int(&mut bytes, tx.inputs.len() as u64);
    for input in &tx.inputs {
        bytes.extend_from_slice(input.previous_output.hash.as_bytes());
        bytes.extend_from_slice(&input.previous_output.index.to_le_bytes());
        write_script(&mut bytes, &input.script_sig);
        bytes.extend_from_slice(&input.sequence.to_le_bytes());
    }

    write_var_int(&mut bytes, tx.outputs.len() as u64);
    for output in &tx.outputs {
        bytes.extend_from_slice(&output.value.to_le_bytes());
        write_script(&mut bytes, &output.script_pubkey);
    }

    bytes.extend_from_slice(&tx.lock_time.to_le_bytes());
    bytes
}

/// Computes the transaction id
pub fn id(tx: &Transaction) -> Hash {
    super::double_sha256(&serialize(tx))
}

fn write_script(buf: &mut Vec<u8>, script: &Script) {
    write_var_int(buf, script.len() as u64);
    buf.extend_from_slice(script.as_bytes());
}
