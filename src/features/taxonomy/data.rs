//! The site's static category tree.

use super::tree::TaxonomyNode;

const fn leaf(
    name: &'static str,
    path: &'static str,
    icon: &'static str,
    description: &'static str,
) -> TaxonomyNode {
    TaxonomyNode {
        name,
        path,
        icon,
        description,
        children: &[],
    }
}

pub static TAXONOMY: &[TaxonomyNode] = &[
    TaxonomyNode {
        name: "Auto",
        path: "auto",
        icon: "car",
        description: "How car insurance works, what each coverage pays for, and how to save on premiums.",
        children: &[
            TaxonomyNode {
                name: "Liability",
                path: "auto/liability",
                icon: "scale",
                description: "Coverage for injuries and damage you cause to others.",
                children: &[
                    leaf(
                        "Bodily Injury",
                        "auto/liability/bodily-injury",
                        "user-injured",
                        "Pays medical bills and lost wages of people hurt in an accident you cause.",
                    ),
                    leaf(
                        "Property Damage",
                        "auto/liability/property-damage",
                        "fence",
                        "Pays to repair other people's vehicles and property after an at-fault accident.",
                    ),
                ],
            },
            leaf(
                "Collision",
                "auto/collision",
                "car-crash",
                "Repairs your own car after a crash, regardless of fault.",
            ),
            leaf(
                "Comprehensive",
                "auto/comprehensive",
                "cloud-hail",
                "Covers theft, fire, hail, flooding and other non-collision damage.",
            ),
            leaf(
                "Gap Insurance",
                "auto/gap-insurance",
                "receipt",
                "Covers the difference between your loan balance and your car's value after a total loss.",
            ),
            leaf(
                "Uninsured Motorist",
                "auto/uninsured-motorist",
                "shield-alert",
                "Protects you when the at-fault driver has little or no insurance.",
            ),
        ],
    },
    TaxonomyNode {
        name: "Home",
        path: "home",
        icon: "home",
        description: "Protecting the place you live, whether you own it or rent it.",
        children: &[
            TaxonomyNode {
                name: "Homeowners",
                path: "home/homeowners",
                icon: "house",
                description: "Policies that cover the structure, your belongings and your liability.",
                children: &[
                    leaf(
                        "Dwelling Coverage",
                        "home/homeowners/dwelling",
                        "hammer",
                        "Rebuilds or repairs the house itself after a covered loss.",
                    ),
                    leaf(
                        "Personal Property",
                        "home/homeowners/personal-property",
                        "sofa",
                        "Replaces furniture, electronics, clothing and other belongings.",
                    ),
                    leaf(
                        "Personal Liability",
                        "home/homeowners/liability",
                        "scale",
                        "Covers injuries to guests and damage you accidentally cause to others.",
                    ),
                ],
            },
            leaf(
                "Renters",
                "home/renters",
                "key",
                "Affordable protection for tenants' belongings and liability.",
            ),
            leaf(
                "Condo",
                "home/condo",
                "building",
                "Fills the gaps between your HOA master policy and your unit.",
            ),
            leaf(
                "Flood",
                "home/flood",
                "waves",
                "Flood damage is excluded from standard policies; here is how to cover it.",
            ),
        ],
    },
    TaxonomyNode {
        name: "Health",
        path: "health",
        icon: "heart-pulse",
        description: "Understanding health plans, government programs and out-of-pocket costs.",
        children: &[
            TaxonomyNode {
                name: "Medicare",
                path: "health/medicare",
                icon: "id-card",
                description: "Federal health insurance for people 65 and older and some younger people with disabilities.",
                children: &[
                    leaf(
                        "Part A",
                        "health/medicare/part-a",
                        "hospital",
                        "Hospital insurance: inpatient stays, skilled nursing and hospice.",
                    ),
                    leaf(
                        "Part B",
                        "health/medicare/part-b",
                        "stethoscope",
                        "Medical insurance: doctor visits, outpatient care and preventive services.",
                    ),
                    leaf(
                        "Medicare Advantage",
                        "health/medicare/advantage",
                        "layers",
                        "Part C plans from private insurers that bundle Parts A, B and often D.",
                    ),
                    leaf(
                        "Part D",
                        "health/medicare/part-d",
                        "pill",
                        "Prescription drug coverage and how the coverage phases work.",
                    ),
                ],
            },
            leaf(
                "Medicaid",
                "health/medicaid",
                "hand-heart",
                "Joint federal and state coverage for people with limited income.",
            ),
            TaxonomyNode {
                name: "Individual Plans",
                path: "health/individual",
                icon: "user",
                description: "Marketplace and private plans you buy on your own.",
                children: &[
                    leaf(
                        "HMO Plans",
                        "health/individual/hmo",
                        "network",
                        "Lower premiums in exchange for an in-network doctor list and referrals.",
                    ),
                    leaf(
                        "PPO Plans",
                        "health/individual/ppo",
                        "route",
                        "More provider freedom, including out-of-network care, at a higher cost.",
                    ),
                    leaf(
                        "HSA-Eligible Plans",
                        "health/individual/hsa",
                        "piggy-bank",
                        "High-deductible plans paired with a tax-advantaged savings account.",
                    ),
                ],
            },
            leaf(
                "Dental & Vision",
                "health/dental-vision",
                "eye",
                "Stand-alone coverage for checkups, glasses and dental work.",
            ),
        ],
    },
    TaxonomyNode {
        name: "Life",
        path: "life",
        icon: "shield-heart",
        description: "Choosing life insurance that fits your family and budget.",
        children: &[
            leaf(
                "Term Life",
                "life/term",
                "hourglass",
                "Coverage for a fixed period at the lowest cost per dollar of benefit.",
            ),
            leaf(
                "Whole Life",
                "life/whole",
                "infinity",
                "Permanent coverage with guaranteed premiums and cash value.",
            ),
            leaf(
                "Universal Life",
                "life/universal",
                "sliders",
                "Permanent coverage with flexible premiums and death benefits.",
            ),
            leaf(
                "Final Expense",
                "life/final-expense",
                "flower",
                "Small whole-life policies that cover funeral and end-of-life costs.",
            ),
        ],
    },
    TaxonomyNode {
        name: "Business",
        path: "business",
        icon: "briefcase",
        description: "Insurance for small businesses, freelancers and their employees.",
        children: &[
            leaf(
                "General Liability",
                "business/general-liability",
                "scale",
                "Covers customer injuries and property damage caused by your business.",
            ),
            leaf(
                "Commercial Property",
                "business/commercial-property",
                "warehouse",
                "Protects buildings, equipment and inventory.",
            ),
            leaf(
                "Workers' Compensation",
                "business/workers-compensation",
                "hard-hat",
                "Pays medical costs and lost wages for employees hurt on the job.",
            ),
            leaf(
                "Professional Liability",
                "business/professional-liability",
                "file-signature",
                "Errors and omissions coverage for advice and services you provide.",
            ),
        ],
    },
];
