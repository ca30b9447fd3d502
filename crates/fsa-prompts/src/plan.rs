//! Content plans for the ten module pages.

use fsa_core::{ModuleId, TOTAL_MODULES};
use serde::Serialize;

/// How a module touches on alternative, self-custodied assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MentionStyle {
    Subtle,
    InflationContext,
    SelfCustodyIntro,
    PermissionlessAssets,
    CounterpartyRisk,
    CapitalGains,
    AssetClassComparison,
    SelfInsurance,
    DigitalSecurityPrinciples,
    ToolDecisionPoint,
}

impl MentionStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::InflationContext => "inflation-context",
            Self::SelfCustodyIntro => "self-custody-intro",
            Self::PermissionlessAssets => "permissionless-assets",
            Self::CounterpartyRisk => "counterparty-risk",
            Self::CapitalGains => "capital-gains",
            Self::AssetClassComparison => "asset-class-comparison",
            Self::SelfInsurance => "self-insurance",
            Self::DigitalSecurityPrinciples => "digital-security-principles",
            Self::ToolDecisionPoint => "tool-decision-point",
        }
    }

    /// Writing guidance for the mention.
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Subtle => "One sentence at most, in passing. Do not elaborate.",
            Self::InflationContext => {
                "List it as one of several inflation hedges next to gold, I-Bonds and stocks."
            }
            Self::SelfCustodyIntro => {
                "Introduce self-custody neutrally: cash, metals and digital assets you hold yourself."
            }
            Self::PermissionlessAssets => {
                "Contrast permissioned credit with assets that need nobody's approval. Keep it brief."
            }
            Self::CounterpartyRisk => {
                "Explain counterparty risk conceptually. Stay informative, not promotional."
            }
            Self::CapitalGains => {
                "State the tax treatment factually and suggest consulting a tax professional."
            }
            Self::AssetClassComparison => {
                "Compare asset classes objectively, including alternatives, with a link to a comparison."
            }
            Self::SelfInsurance => {
                "Frame holding liquid assets as a way to self-insure small risks."
            }
            Self::DigitalSecurityPrinciples => {
                "Treat private keys like passwords: universal security habits for every asset."
            }
            Self::ToolDecisionPoint => {
                "Mark the transition from fundamentals to choosing tools, with a clear next-step link."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
}

/// What a module page must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModulePlan {
    pub id: u8,
    pub slug: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub calculators: &'static [&'static str],
    pub scenarios: &'static [&'static str],
    pub mention: MentionStyle,
    pub priority: Priority,
}

impl ModulePlan {
    /// Page path the generated module is saved to.
    #[must_use]
    pub fn page_path(&self) -> String {
        format!("modules/{}.html", self.slug)
    }
}

pub const PLANS: [ModulePlan; TOTAL_MODULES as usize] = [
    ModulePlan {
        id: 1,
        slug: "money-mindset-cash-flow",
        title: "Money Mindset & Cash Flow Mastery",
        duration: "20-30 min",
        description: "Understand your relationship with money and take control of your cash flow",
        topics: &["money story", "income vs expenses", "budgeting", "pay yourself first"],
        calculators: &["budget-calculator", "cash-flow-simulator"],
        scenarios: &[
            "A $3,200/month budget",
            "Irregular gig income",
            "Cutting $500/month painlessly",
        ],
        mention: MentionStyle::Subtle,
        priority: Priority::Critical,
    },
    ModulePlan {
        id: 2,
        slug: "emergency-funds-saving",
        title: "Emergency Funds & Smart Saving",
        duration: "25 min",
        description: "Build a buffer that protects you from life's surprises",
        topics: &[
            "3-6 month emergency fund",
            "liquidity vs returns",
            "inflation risk",
            "sinking funds",
        ],
        calculators: &[
            "emergency-fund-calculator",
            "inflation-erosion-visualizer",
            "savings-tracker",
        ],
        scenarios: &[
            "Surviving a job loss",
            "Car repair: prepared vs unprepared",
            "Building $10k in 12 months",
        ],
        mention: MentionStyle::InflationContext,
        priority: Priority::Critical,
    },
    ModulePlan {
        id: 3,
        slug: "banking-basics",
        title: "Banking Without Getting Robbed",
        duration: "20 min",
        description: "Use banks strategically and understand how the system works",
        topics: &[
            "fractional reserve",
            "account types",
            "fee avoidance",
            "deposit insurance",
        ],
        calculators: &["bank-fee-calculator", "account-comparison-tool"],
        scenarios: &[
            "The overdraft fee trap",
            "Choosing the right bank",
            "Automating your accounts",
        ],
        mention: MentionStyle::SelfCustodyIntro,
        priority: Priority::High,
    },
    ModulePlan {
        id: 4,
        slug: "credit-scores",
        title: "Credit Scores Decoded",
        duration: "25 min",
        description: "Build and maintain excellent credit on purpose",
        topics: &[
            "how scores are calculated",
            "payment history",
            "utilization",
            "building credit",
        ],
        calculators: &["credit-score-simulator", "utilization-calculator"],
        scenarios: &[
            "580 to 720 in 18 months",
            "Using cards without debt",
            "Recovering from mistakes",
        ],
        mention: MentionStyle::PermissionlessAssets,
        priority: Priority::High,
    },
    ModulePlan {
        id: 5,
        slug: "debt-strategy",
        title: "Debt Strategy: Borrow Smart or Not at All",
        duration: "30 min",
        description: "Understand the true cost of debt and when it can make sense",
        topics: &[
            "good vs bad debt",
            "APR vs APY",
            "amortization",
            "avalanche vs snowball",
        ],
        calculators: &[
            "debt-payoff-calculator",
            "true-cost-calculator",
            "loan-amortization-visualizer",
        ],
        scenarios: &[
            "Comparing $25k of student loans",
            "A credit card snowball",
            "Car loan vs saving up",
        ],
        mention: MentionStyle::CounterpartyRisk,
        priority: Priority::Critical,
    },
    ModulePlan {
        id: 6,
        slug: "taxes-paychecks",
        title: "Taxes & Paychecks Demystified",
        duration: "25 min",
        description: "Understand the tax system and keep more of your pay",
        topics: &[
            "gross vs net",
            "withholding",
            "tax brackets",
            "deductions",
            "tax-advantaged accounts",
        ],
        calculators: &["paycheck-breakdown", "tax-bracket-calculator", "w4-optimizer"],
        scenarios: &[
            "Your first paycheck explained",
            "Adjusting withholding",
            "Side hustle taxes",
        ],
        mention: MentionStyle::CapitalGains,
        priority: Priority::High,
    },
    ModulePlan {
        id: 7,
        slug: "investing-fundamentals",
        title: "Investing for Humans",
        duration: "35 min",
        description: "Build long-term wealth through compound growth",
        topics: &[
            "stocks, bonds and funds",
            "diversification",
            "compound interest",
            "dollar-cost averaging",
            "retirement accounts",
        ],
        calculators: &[
            "compound-growth-visualizer",
            "asset-allocation-simulator",
            "retirement-calculator",
        ],
        scenarios: &[
            "$500/month for 30 years",
            "The value of a 10-year head start",
            "Living through a market crash",
        ],
        mention: MentionStyle::AssetClassComparison,
        priority: Priority::Critical,
    },
    ModulePlan {
        id: 8,
        slug: "risk-insurance",
        title: "Protect What You've Built",
        duration: "25 min",
        description: "Manage risk without over-insuring",
        topics: &[
            "health insurance",
            "auto",
            "life",
            "disability",
            "renters and homeowners",
        ],
        calculators: &[
            "insurance-needs-calculator",
            "premium-optimizer",
            "coverage-gap-identifier",
        ],
        scenarios: &[
            "A $50k medical bill",
            "Car accident coverage",
            "Disability at 35",
        ],
        mention: MentionStyle::SelfInsurance,
        priority: Priority::High,
    },
    ModulePlan {
        id: 9,
        slug: "consumer-protection",
        title: "Don't Get Scammed",
        duration: "20 min",
        description: "Spend wisely and avoid predatory practices",
        topics: &[
            "comparison shopping",
            "spotting scams",
            "contracts",
            "digital security",
            "two-factor authentication",
        ],
        calculators: &["scam-detector-quiz", "password-strength-checker"],
        scenarios: &[
            "Signs of a fake job offer",
            "Extended warranty math",
            "Romance scam red flags",
        ],
        mention: MentionStyle::DigitalSecurityPrinciples,
        priority: Priority::High,
    },
    ModulePlan {
        id: 10,
        slug: "financial-master-plan",
        title: "Your Financial Master Plan",
        duration: "30 min",
        description: "Bring everything together into one coherent plan",
        topics: &[
            "goal setting",
            "net worth",
            "prioritization",
            "financial independence",
            "periodic review",
        ],
        calculators: &[
            "net-worth-calculator",
            "goal-prioritization-matrix",
            "fi-calculator",
        ],
        scenarios: &[
            "A 30-year plan at 25",
            "Course correction at 45",
            "Financial independence by 50",
        ],
        mention: MentionStyle::ToolDecisionPoint,
        priority: Priority::Critical,
    },
];

/// Plan of module `id`.
#[must_use]
pub fn plan(id: ModuleId) -> &'static ModulePlan {
    &PLANS[usize::from(id.get() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsa_core::MODULES;
    use pretty_assertions::assert_eq;

    #[test]
    fn plans_line_up_with_module_descriptors() {
        for (plan, module) in PLANS.iter().zip(MODULES.iter()) {
            assert_eq!(plan.id, module.id);
            assert_eq!(plan.slug, module.slug);
        }
    }

    #[test]
    fn every_plan_has_content() {
        for plan in &PLANS {
            assert!(!plan.topics.is_empty(), "module {} has no topics", plan.id);
            assert!(!plan.calculators.is_empty());
            assert_eq!(plan.scenarios.len(), 3);
        }
    }

    #[test]
    fn mention_style_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&MentionStyle::ToolDecisionPoint).unwrap(),
            r#""tool-decision-point""#
        );
    }
}
