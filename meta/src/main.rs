fn main() {
    multiversx_sc_meta_lib::cli_main::<agent_consensus::AbiProvider>();
}
