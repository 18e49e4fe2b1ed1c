//! The mint engine — claim settlement, epoch advancement, and administration.

use crate::auth::Authorizer;
use crate::config::EngineConfig;
use crate::epoch::EpochState;
use crate::error::EngineError;
use crate::event::Event;
use crate::verify;
use cinder_crypto::EcdsaSig;
use cinder_ledger::{ChainContext, Ledger};
use cinder_types::{Address, Hash256, U256};
use cinder_work::{BurnMonitor, BurnTransition, DifficultyController, RetargetOutcome};
use serde::Serialize;

/// Outcome of a settled claim.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClaimReceipt {
    pub claimant: Address,
    pub reward: U256,
    /// The epoch that has just begun.
    pub epoch: u64,
    /// The freshly issued challenge for that epoch.
    pub challenge: Hash256,
}

/// The single owned aggregate holding all engine state.
///
/// The host guarantees serialized execution; every mutating operation takes
/// `&mut self`, so exclusive ownership stands in for the host's mutual
/// exclusion. Every fallible step of a claim precedes the first state
/// mutation, reproducing the host's all-or-nothing rollback contract
/// structurally.
pub struct MintEngine {
    reward_amount: U256,
    burn_amount: U256,
    min_epoch_separation_secs: u64,
    difficulty: DifficultyController,
    burn: BurnMonitor,
    epoch: EpochState,
    total_minted: U256,
    authorizer: Box<dyn Authorizer>,
    pending_events: Vec<Event>,
}

impl MintEngine {
    /// Construct the engine: target at its easiest bound, burning disabled
    /// with observation deferred forever, and the first epoch begun so a
    /// challenge is live immediately.
    pub fn new(
        config: EngineConfig,
        authorizer: Box<dyn Authorizer>,
        ctx: &dyn ChainContext,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let difficulty = DifficultyController::new(
            config.min_target,
            config.max_target,
            config.retarget_interval_epochs,
            config.retarget_denominator,
            config.target_blocks_per_period,
            ctx.block_height(),
        );
        let mut engine = Self {
            reward_amount: config.reward_amount,
            burn_amount: config.burn_amount,
            min_epoch_separation_secs: config.min_epoch_separation_secs,
            difficulty,
            burn: BurnMonitor::new(),
            epoch: EpochState::genesis(),
            total_minted: U256::zero(),
            authorizer,
            pending_events: Vec::new(),
        };
        engine.advance_epoch(ctx);
        tracing::info!(
            epoch = engine.epoch.number(),
            challenge = %engine.epoch.challenge(),
            target = %engine.difficulty.current_target(),
            "engine initialized"
        );
        Ok(engine)
    }

    // ── Claim settlement ─────────────────────────────────────────────────

    /// Settle a proof-of-work claim from `caller`.
    ///
    /// Verification, the duplicate-submission gate, the balance gate, and
    /// the reward transfer all run before any engine state changes; a
    /// failure at any of them leaves the engine exactly as it was. The burn
    /// afterwards is best-effort and never unwinds a settled claim.
    pub fn claim(
        &mut self,
        caller: &Address,
        signed_message_hash: &Hash256,
        sig: &EcdsaSig,
        ledger: &mut dyn Ledger,
        ctx: &dyn ChainContext,
    ) -> Result<ClaimReceipt, EngineError> {
        verify::verify_or_fail(
            &self.epoch.challenge(),
            self.difficulty.current_target(),
            signed_message_hash,
            sig,
            caller,
        )?;

        let duration = ctx.timestamp().duration_since(self.epoch.last_epoch_at());
        if duration < self.min_epoch_separation_secs {
            return Err(EngineError::DuplicateSolution);
        }

        let balance = ledger.balance_of_self();
        if balance < self.reward_amount {
            return Err(EngineError::InsufficientBalance {
                needed: self.reward_amount,
                available: balance,
            });
        }
        ledger.transfer(caller, self.reward_amount)?;

        // Past the last fallible step: settle.
        self.total_minted = self
            .total_minted
            .checked_add(self.reward_amount)
            .unwrap_or(U256::MAX);
        self.advance_epoch(ctx);

        if self.burn.is_enabled() {
            let remaining = balance - self.reward_amount;
            if remaining > self.burn_amount {
                if let Err(error) = ledger.burn(self.burn_amount) {
                    tracing::warn!(
                        %error,
                        amount = %self.burn_amount,
                        "burn failed after settled claim, continuing"
                    );
                }
            }
        }

        let receipt = ClaimReceipt {
            claimant: *caller,
            reward: self.reward_amount,
            epoch: self.epoch.number(),
            challenge: self.epoch.challenge(),
        };
        self.pending_events.push(Event::Claim {
            to: *caller,
            reward: self.reward_amount,
            epoch: self.epoch.number(),
            challenge: self.epoch.challenge(),
        });
        tracing::debug!(
            claimant = %caller,
            epoch = self.epoch.number(),
            "claim settled"
        );
        Ok(receipt)
    }

    fn advance_epoch(&mut self, ctx: &dyn ChainContext) {
        self.epoch.advance(ctx);
        if self.epoch.number() % self.difficulty.interval_epochs() == 0 {
            if let RetargetOutcome::Retargeted { difficulty, .. } =
                self.difficulty.retarget(ctx.block_height())
            {
                match self.burn.observe(difficulty, ctx.block_height()) {
                    Some(BurnTransition::Enabled) => self.pending_events.push(Event::BurningEnabled),
                    Some(BurnTransition::Disabled) => {
                        self.pending_events.push(Event::BurningDisabled)
                    }
                    None => {}
                }
            }
        }
    }

    // ── Administrative setters ───────────────────────────────────────────

    pub fn set_mining_target(&mut self, caller: &Address, target: U256) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        self.difficulty.set_target(target);
        self.pending_events.push(Event::TargetSet {
            target: self.difficulty.current_target(),
        });
        Ok(())
    }

    pub fn set_retarget_interval(&mut self, caller: &Address, epochs: u64) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        if epochs == 0 {
            return Err(EngineError::InvalidConfig(
                "retarget_interval_epochs must be positive".into(),
            ));
        }
        self.difficulty.set_interval_epochs(epochs);
        self.pending_events.push(Event::RetargetIntervalSet { epochs });
        Ok(())
    }

    pub fn set_difficulty_denominator(
        &mut self,
        caller: &Address,
        denominator: u64,
    ) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        if denominator == 0 {
            return Err(EngineError::InvalidConfig(
                "retarget_denominator must be positive".into(),
            ));
        }
        self.difficulty.set_denominator(denominator);
        self.pending_events
            .push(Event::DifficultyDenominatorSet { denominator });
        Ok(())
    }

    pub fn set_target_blocks_per_period(
        &mut self,
        caller: &Address,
        blocks: u64,
    ) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        if blocks == 0 {
            return Err(EngineError::InvalidConfig(
                "target_blocks_per_period must be positive".into(),
            ));
        }
        self.difficulty.set_target_blocks_per_period(blocks);
        self.pending_events
            .push(Event::TargetBlocksPerPeriodSet { blocks });
        Ok(())
    }

    pub fn set_burn_activation_block(
        &mut self,
        caller: &Address,
        block: u64,
    ) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        self.burn.set_activation_block(block);
        self.pending_events.push(Event::BurnActivationBlockSet { block });
        Ok(())
    }

    pub fn set_burning_enabled(&mut self, caller: &Address) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        self.burn.force_enabled(true);
        self.pending_events.push(Event::BurningEnabled);
        Ok(())
    }

    pub fn set_burning_disabled(&mut self, caller: &Address) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        self.burn.force_enabled(false);
        self.pending_events.push(Event::BurningDisabled);
        Ok(())
    }

    /// Sweep engine-held ledger funds to an arbitrary account.
    pub fn admin_transfer(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: U256,
        ledger: &mut dyn Ledger,
    ) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        ledger.transfer(to, amount)?;
        Ok(())
    }

    /// Destroy engine-held ledger funds directly.
    pub fn admin_burn(
        &mut self,
        caller: &Address,
        amount: U256,
        ledger: &mut dyn Ledger,
    ) -> Result<(), EngineError> {
        self.ensure_authorized(caller)?;
        ledger.burn(amount)?;
        Ok(())
    }

    fn ensure_authorized(&self, caller: &Address) -> Result<(), EngineError> {
        if self.authorizer.is_authorized(caller) {
            Ok(())
        } else {
            Err(EngineError::Unauthorized)
        }
    }

    // ── Read surface ─────────────────────────────────────────────────────

    pub fn current_target(&self) -> U256 {
        self.difficulty.current_target()
    }

    /// `max_target / current_target`.
    pub fn current_difficulty(&self) -> U256 {
        self.difficulty.difficulty()
    }

    pub fn challenge(&self) -> Hash256 {
        self.epoch.challenge()
    }

    /// The (target, challenge) pair a miner needs to start working.
    pub fn mining_parameters(&self) -> (U256, Hash256) {
        (self.difficulty.current_target(), self.epoch.challenge())
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.number()
    }

    pub fn reward_amount(&self) -> U256 {
        self.reward_amount
    }

    pub fn total_minted(&self) -> U256 {
        self.total_minted
    }

    pub fn retarget_interval_epochs(&self) -> u64 {
        self.difficulty.interval_epochs()
    }

    pub fn retarget_denominator(&self) -> u64 {
        self.difficulty.denominator()
    }

    pub fn target_blocks_per_period(&self) -> u64 {
        self.difficulty.target_blocks_per_period()
    }

    pub fn burn_activation_block(&self) -> u64 {
        self.burn.activation_block()
    }

    pub fn burning_enabled(&self) -> bool {
        self.burn.is_enabled()
    }

    pub fn max_observed_difficulty(&self) -> U256 {
        self.burn.max_observed_difficulty()
    }

    /// Drain pending audit events in emission order.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending_events)
    }
}
