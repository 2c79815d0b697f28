use super::models::{GlossaryCategory::{self, *}, GlossaryItem};

const fn term(
    term: &'static str,
    definition: &'static str,
    category: GlossaryCategory,
) -> GlossaryItem {
    GlossaryItem {
        term,
        definition,
        category,
    }
}

pub static GLOSSARY: &[GlossaryItem] = &[
    term(
        "Premium",
        "The amount you pay, usually monthly or yearly, to keep a policy active.",
        General,
    ),
    term(
        "Deductible",
        "The amount you pay out of pocket on a claim before your insurer pays the rest.",
        General,
    ),
    term(
        "Policyholder",
        "The person or business that owns the insurance policy.",
        General,
    ),
    term(
        "Claim",
        "A formal request asking your insurer to pay for a covered loss.",
        General,
    ),
    term(
        "Exclusion",
        "A situation or type of loss the policy specifically does not cover.",
        General,
    ),
    term(
        "Rider",
        "An add-on that changes or extends the coverage of a base policy.",
        General,
    ),
    term(
        "Underwriting",
        "How an insurer reviews risk to decide whether to offer coverage and at what price.",
        General,
    ),
    term(
        "Liability Coverage",
        "Pays for injuries or property damage you cause to other people in an accident.",
        Auto,
    ),
    term(
        "Collision Coverage",
        "Pays to repair your own car after a crash, regardless of who was at fault.",
        Auto,
    ),
    term(
        "Comprehensive Coverage",
        "Pays for damage to your car from theft, fire, hail, animals and other non-crash events.",
        Auto,
    ),
    term(
        "Gap Insurance",
        "Covers the difference between what your car is worth and what you still owe on the loan.",
        Auto,
    ),
    term(
        "Uninsured Motorist Coverage",
        "Protects you when the at-fault driver has no insurance or not enough of it.",
        Auto,
    ),
    term(
        "Dwelling Coverage",
        "Pays to repair or rebuild the structure of your home after a covered loss.",
        Home,
    ),
    term(
        "Personal Property Coverage",
        "Reimburses you for belongings such as furniture, clothing and electronics.",
        Home,
    ),
    term(
        "Replacement Cost",
        "Pays what it costs to replace damaged property with new items of similar kind and quality.",
        Home,
    ),
    term(
        "Actual Cash Value",
        "Pays the replacement cost of property minus depreciation.",
        Home,
    ),
    term(
        "Loss of Use",
        "Covers extra living expenses while your home is being repaired after a covered loss.",
        Home,
    ),
    term(
        "Copay",
        "A fixed amount you pay for a covered health service, such as a doctor visit.",
        Health,
    ),
    term(
        "Coinsurance",
        "Your share of the cost of a covered service, as a percentage, after the deductible.",
        Health,
    ),
    term(
        "Out-of-Pocket Maximum",
        "The most you will pay for covered care in a plan year before the plan pays in full.",
        Health,
    ),
    term(
        "Network",
        "The doctors, hospitals and pharmacies your health plan has contracted with.",
        Health,
    ),
    term(
        "Formulary",
        "The list of prescription drugs a plan covers.",
        Health,
    ),
    term(
        "Beneficiary",
        "The person or organization that receives the payout from a life insurance policy.",
        Life,
    ),
    term(
        "Death Benefit",
        "The amount paid to beneficiaries when the insured person dies.",
        Life,
    ),
    term(
        "Cash Value",
        "The savings component of permanent life insurance that can grow over time.",
        Life,
    ),
    term(
        "Term Length",
        "The number of years a term life policy stays in force.",
        Life,
    ),
    term(
        "General Liability",
        "Covers a business against claims of bodily injury or property damage to others.",
        Business,
    ),
    term(
        "Workers' Compensation",
        "Pays medical costs and lost wages for employees injured on the job.",
        Business,
    ),
    term(
        "Business Interruption",
        "Replaces lost income when a covered event forces a business to close temporarily.",
        Business,
    ),
    term(
        "Professional Liability",
        "Protects against claims of negligence or mistakes in professional services.",
        Business,
    ),
];
