use soroban_sdk::Env;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Transfer records are kept for audit, so they live longer than the instance.
pub(crate) const TX_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TX_LIFETIME_THRESHOLD: u32 = TX_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
