// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! The deployment plan: an ordered list of step descriptors with typed
//! references to earlier steps' results.
//!
//! The suite wires constructor arguments from previously deployed addresses,
//! so the ordering is load-bearing: a step may only reference steps that come
//! before it, and execution is strictly sequential.

use std::fmt;

use crate::core::config::SuiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Controller,
    Settings,
    FeeController,
    Registry,
    Bridge,
    SimpleNft,
}

impl StepId {
    /// The artifact name the step deploys.
    pub fn contract_name(self) -> &'static str {
        match self {
            StepId::Controller => "Controller",
            StepId::Settings => "Settings",
            StepId::FeeController => "FeeController",
            StepId::Registry => "Registry",
            StepId::Bridge => "Bridge",
            StepId::SimpleNft => "SimpleNFT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            StepId::Controller,
            StepId::Settings,
            StepId::FeeController,
            StepId::Registry,
            StepId::Bridge,
            StepId::SimpleNft,
        ]
        .into_iter()
        .find(|id| id.contract_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.contract_name())
    }
}

/// A single constructor argument of a deployment step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepArg {
    /// The confirmed address of an earlier step in the same run.
    Address(StepId),
    /// A fixed value, coerced against the constructor's parameter type.
    Literal(String),
}

impl fmt::Display for StepArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StepArg::Address(id) => write!(f, "{id}.address"),
            StepArg::Literal(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeployStep {
    pub id: StepId,
    pub args: Vec<StepArg>,
}

/// An on-chain ownership handover performed after all steps have deployed.
#[derive(Debug, Clone)]
pub struct OwnershipTransfer {
    pub contract: StepId,
    pub new_owner: StepId,
}

#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub steps: Vec<DeployStep>,
    pub handover: Option<OwnershipTransfer>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PlanError {
    #[error("step {step} depends on {dependency}, which has not been deployed yet")]
    MissingDependency { step: StepId, dependency: StepId },

    #[error("duplicate step: {0}")]
    DuplicateStep(StepId),

    #[error("ownership handover references {0}, which is not part of the plan")]
    UnknownHandoverParty(StepId),
}

impl DeploymentPlan {
    /// Checks that every address dependency references a strictly earlier
    /// step and that the handover parties are part of the plan.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut seen: Vec<StepId> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if seen.contains(&step.id) {
                return Err(PlanError::DuplicateStep(step.id));
            }
            for arg in &step.args {
                if let StepArg::Address(dependency) = arg {
                    if !seen.contains(dependency) {
                        return Err(PlanError::MissingDependency {
                            step: step.id,
                            dependency: *dependency,
                        });
                    }
                }
            }
            seen.push(step.id);
        }
        if let Some(handover) = &self.handover {
            for id in [handover.contract, handover.new_owner] {
                if !seen.contains(&id) {
                    return Err(PlanError::UnknownHandoverParty(id));
                }
            }
        }
        Ok(())
    }
}

/// Builds the fixed plan for the bridge contract suite.
///
/// Controller first, then everything that takes its address, then the Bridge
/// tying the suite together, the standalone NFT last, and finally the
/// Registry handed over to the Bridge.
pub fn bridge_suite(suite: &SuiteConfig) -> DeploymentPlan {
    DeploymentPlan {
        steps: vec![
            DeployStep {
                id: StepId::Controller,
                args: vec![],
            },
            DeployStep {
                id: StepId::Settings,
                args: vec![
                    StepArg::Address(StepId::Controller),
                    StepArg::Literal(suite.fee_receiver.to_string()),
                ],
            },
            DeployStep {
                id: StepId::FeeController,
                args: vec![
                    StepArg::Address(StepId::Controller),
                    StepArg::Address(StepId::Settings),
                ],
            },
            DeployStep {
                id: StepId::Registry,
                args: vec![],
            },
            DeployStep {
                id: StepId::Bridge,
                args: vec![
                    StepArg::Address(StepId::Controller),
                    StepArg::Address(StepId::Settings),
                    StepArg::Address(StepId::Registry),
                    StepArg::Address(StepId::FeeController),
                ],
            },
            DeployStep {
                id: StepId::SimpleNft,
                args: vec![
                    StepArg::Literal(suite.nft_name.clone()),
                    StepArg::Literal(suite.nft_symbol.clone()),
                    StepArg::Literal(suite.nft_supply.clone()),
                ],
            },
        ],
        handover: Some(OwnershipTransfer {
            contract: StepId::Registry,
            new_owner: StepId::Bridge,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_plan_is_valid() {
        let plan = bridge_suite(&SuiteConfig::default());
        plan.validate().unwrap();

        let ids: Vec<_> = plan.steps.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                StepId::Controller,
                StepId::Settings,
                StepId::FeeController,
                StepId::Registry,
                StepId::Bridge,
                StepId::SimpleNft,
            ]
        );

        let handover = plan.handover.unwrap();
        assert_eq!(handover.contract, StepId::Registry);
        assert_eq!(handover.new_owner, StepId::Bridge);
    }

    #[test]
    fn suite_plan_wiring() {
        let suite = SuiteConfig::default();
        let plan = bridge_suite(&suite);

        assert_eq!(
            plan.steps[1].args,
            vec![
                StepArg::Address(StepId::Controller),
                StepArg::Literal(suite.fee_receiver.to_string()),
            ]
        );
        assert_eq!(
            plan.steps[4].args,
            vec![
                StepArg::Address(StepId::Controller),
                StepArg::Address(StepId::Settings),
                StepArg::Address(StepId::Registry),
                StepArg::Address(StepId::FeeController),
            ]
        );
        assert_eq!(
            plan.steps[5].args,
            vec![
                StepArg::Literal("testNFT".to_string()),
                StepArg::Literal("TNFT".to_string()),
                StepArg::Literal("1000".to_string()),
            ]
        );
    }

    #[test]
    fn forward_dependency_is_rejected() {
        let plan = DeploymentPlan {
            steps: vec![
                DeployStep {
                    id: StepId::Settings,
                    args: vec![StepArg::Address(StepId::Controller)],
                },
                DeployStep {
                    id: StepId::Controller,
                    args: vec![],
                },
            ],
            handover: None,
        };
        assert_eq!(
            plan.validate(),
            Err(PlanError::MissingDependency {
                step: StepId::Settings,
                dependency: StepId::Controller,
            })
        );
    }

    #[test]
    fn duplicate_step_is_rejected() {
        let plan = DeploymentPlan {
            steps: vec![
                DeployStep {
                    id: StepId::Registry,
                    args: vec![],
                },
                DeployStep {
                    id: StepId::Registry,
                    args: vec![],
                },
            ],
            handover: None,
        };
        assert_eq!(plan.validate(), Err(PlanError::DuplicateStep(StepId::Registry)));
    }

    #[test]
    fn handover_must_reference_plan_steps() {
        let plan = DeploymentPlan {
            steps: vec![DeployStep {
                id: StepId::Registry,
                args: vec![],
            }],
            handover: Some(OwnershipTransfer {
                contract: StepId::Registry,
                new_owner: StepId::Bridge,
            }),
        };
        assert_eq!(
            plan.validate(),
            Err(PlanError::UnknownHandoverParty(StepId::Bridge))
        );
    }

    #[test]
    fn step_names_round_trip() {
        assert_eq!(StepId::from_name("SimpleNFT"), Some(StepId::SimpleNft));
        assert_eq!(StepId::from_name("feecontroller"), Some(StepId::FeeController));
        assert_eq!(StepId::from_name("Token"), None);
    }
}
