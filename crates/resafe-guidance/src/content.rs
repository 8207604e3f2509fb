//! Hand-authored guidance content for the seven-step method
//!
//! An explicit keyed map rather than nested literals, so drill-down key
//! resolution stays a pure lookup. The tree is finite and acyclic as
//! authored; nothing below depends on that beyond termination in practice.

use crate::topic::GuidanceTopic;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Keys of the seven top-level step topics, in workflow order
pub const STEP_KEYS: [&str; 7] = [
    "Step 1", "Step 2", "Step 3", "Step 4", "Step 5", "Step 6", "Step 7",
];

static TREE: Lazy<IndexMap<&'static str, GuidanceTopic>> = Lazy::new(build_tree);

/// Look up a topic's detail by its exact key
#[must_use]
pub fn topic(key: &str) -> Option<&'static GuidanceTopic> {
    TREE.get(key)
}

/// The seven top-level step topics, in workflow order
pub fn steps() -> impl Iterator<Item = &'static GuidanceTopic> {
    STEP_KEYS.iter().filter_map(|key| TREE.get(key))
}

/// Every authored topic, in authoring order
pub fn all_topics() -> impl Iterator<Item = &'static GuidanceTopic> {
    TREE.values()
}

fn entry(
    tree: &mut IndexMap<&'static str, GuidanceTopic>,
    key: &'static str,
    description: &str,
    substeps: &[&str],
) {
    tree.insert(
        key,
        GuidanceTopic::new(
            key,
            description,
            substeps.iter().map(|s| (*s).to_string()).collect(),
        ),
    );
}

#[allow(clippy::too_many_lines)]
fn build_tree() -> IndexMap<&'static str, GuidanceTopic> {
    let mut tree = IndexMap::new();

    entry(
        &mut tree,
        "Step 1",
        "Define the scope of the safety-critical system: what it is, where \
         its boundary lies, and which losses the analysis must prevent.",
        &[
            "1.1 - Define General Concerns: Capture the analysis purpose, working assumptions and system boundary",
            "1.2 - Identify Accidents and Hazards: Enumerate the losses to prevent and the system states that lead to them",
            "1.3 - Derive Safety Constraints: Invert each hazard into a constraint the system must uphold",
            "1.4 - Assign Responsibilities: Map every constraint onto the components that enforce it",
            "1.5 - Collect Reference Resources (Optional)",
        ],
    );
    entry(
        &mut tree,
        "1.1 - Define General Concerns",
        "Agree on what the analysis is for before producing artifacts; a \
         vague boundary invalidates every later step.",
        &[
            "Identify Key Concepts: Settle the shared vocabulary for the system under analysis",
            "State the Analysis Purpose: One or two sentences on why this iteration runs now",
            "Record Assumptions: Operating conditions taken as given, with their sources",
            "Draw the System Boundary: What is inside, what is environment, what is out of scope",
        ],
    );
    entry(
        &mut tree,
        "1.2 - Identify Accidents and Hazards",
        "Accidents are the unacceptable losses; hazards are the system \
         states that can lead to them. Every hazard must trace to at least \
         one accident.",
        &[
            "List Accidents: Assign each loss a code (A1, A2, ...) and a clear description",
            "List Hazards: Assign each hazard a code (H1, H2, ...) and link it to its accidents",
            "Review Traceability: A hazard that traces to no accident is a gap, not an error",
        ],
    );
    entry(
        &mut tree,
        "1.3 - Derive Safety Constraints",
        "Each hazard inverts into one or more constraints (SC-01, SC-02, \
         ...) stating what the system must or must not do.",
        &[
            "Write Constraint Statements: Use enforceable 'shall' language",
            "Link Constraints to Hazards: Every constraint cites the hazard codes it mitigates",
        ],
    );
    entry(
        &mut tree,
        "1.4 - Assign Responsibilities",
        "Constraints are only as good as the components responsible for \
         them; assign each constraint to the components that enforce it.",
        &[
            "Inventory System Components: Human controllers, devices, and physical channels alike",
            "Map Responsibilities: Each responsibility statement cites the constraint codes it serves",
        ],
    );
    entry(
        &mut tree,
        "1.5 - Collect Reference Resources",
        "Ground the analysis in published material: manuals, standards, \
         prior analyses of comparable systems.",
        &[
            "Catalog Sources: Name, category and a resolvable reference for each",
            "Note Relevance: Why the source matters for this iteration",
        ],
    );

    entry(
        &mut tree,
        "Step 2",
        "Model the actors and their goals: who depends on whom for which \
         safety goal, and where a goal obstructs a hazard.",
        &[
            "2.1 - Identify Actors: Controllers, sensors, environment and stakeholders",
            "2.2 - Link Goals: Relate actors to goals with achieves / depends-on / obstructs / satisfies edges",
        ],
    );
    entry(
        &mut tree,
        "2.1 - Identify Actors",
        "Every element that issues, mediates or depends on control belongs \
         in the model, including humans.",
        &[
            "Classify Each Actor: Controller, sensor, environment or stakeholder",
            "List Actor Responsibilities: Free-text statements, later reconciled with Step 1",
        ],
    );
    entry(
        &mut tree,
        "2.2 - Link Goals",
        "Goal links make dependencies explicit; an unstated dependency is \
         where control flaws hide.",
        &[
            "Choose the Link Type: achieves, depends-on, obstructs or satisfies",
            "Name the Goal Precisely: 'Maintain commanded basal delivery', not 'be safe'",
        ],
    );

    entry(
        &mut tree,
        "Step 3",
        "Translate the goal model into a control structure: control actions \
         downward, feedback upward.",
        &[
            "3.1 - Chart Control Actions: Controller, action, controlled process and the feedback relied on",
            "3.2 - Chart Feedback Loops: Source, destination, signal and its latency bound",
        ],
    );
    entry(
        &mut tree,
        "3.1 - Chart Control Actions",
        "One row per commanded action; the feedback column records what the \
         controller watches to know the action worked.",
        &[],
    );
    entry(
        &mut tree,
        "3.2 - Chart Feedback Loops",
        "Feedback with an unstated latency bound cannot be analyzed for \
         timing hazards; always record the bound, even as an estimate.",
        &[],
    );

    entry(
        &mut tree,
        "Step 4",
        "Examine each control action for the contexts in which it becomes \
         unsafe, one of four ways.",
        &[
            "4.1 - Classify Unsafe Control Actions: The four STPA categories",
            "4.2 - Record Hazard Context: Which hazard each UCA manifests, and when",
        ],
    );
    entry(
        &mut tree,
        "4.1 - Classify Unsafe Control Actions",
        "Each control action is examined against all four categories; most \
         yield at least one UCA worth recording.",
        &[
            "Not provided: The action is missing when it is needed",
            "Provided incorrectly: The action occurs when it must not, or with wrong parameters",
            "Incorrect timing: Too early, too late, or out of order",
            "Stopped too soon / applied too long: Wrong duration for a continuous action",
        ],
    );
    entry(
        &mut tree,
        "4.2 - Record Hazard Context",
        "A UCA without its hazard context cannot be inverted into a \
         constraint in Step 5.",
        &[],
    );

    entry(
        &mut tree,
        "Step 5",
        "Invert each unsafe control action into an enforceable controller \
         constraint and name its enforcement mechanism.",
        &[
            "5.1 - Write Controller Constraints: Cite the UCA codes being inverted",
            "5.2 - Track Review Status: Draft, pending review, approved",
        ],
    );

    entry(
        &mut tree,
        "5.1 - Write Controller Constraints",
        "An inverted UCA reads as required behaviour: what the controller \
         shall verify, defer or refuse, and under which conditions.",
        &[],
    );
    entry(
        &mut tree,
        "5.2 - Track Review Status",
        "Constraints move from draft through review to approval; only \
         approved constraints feed the Step 6 scenario work.",
        &[],
    );

    entry(
        &mut tree,
        "Step 6",
        "Work out the causal scenarios by which each UCA leads to a loss, \
         and derive the safety requirements that block them.",
        &[
            "6.1 - Describe Loss Scenarios: UCA, hazard, outcome and severity",
            "6.2 - Derive Safety Requirements: Each requirement links to the scenario it mitigates",
            "6.3 - Plan Mitigations (Optional)",
        ],
    );
    entry(
        &mut tree,
        "6.1 - Describe Loss Scenarios",
        "A scenario ties a UCA to the hazard it manifests and the outcome \
         that follows; severity ranks the remediation queue.",
        &[],
    );
    entry(
        &mut tree,
        "6.2 - Derive Safety Requirements",
        "Requirements carry an owner and a due date; an unowned requirement \
         is a wish, not a requirement.",
        &[],
    );
    entry(
        &mut tree,
        "6.3 - Plan Mitigations",
        "Mitigation summaries feed Step 7; keep them short and attributable.",
        &[],
    );

    entry(
        &mut tree,
        "Step 7",
        "Close the loop: feed the analysis results back into the goal \
         models, and track validation of each change.",
        &[
            "7.1 - Record Model Changes: Area, change, driver and expected impact",
            "7.2 - Track Validation Tasks: Owner, channel and due date for each sign-off",
            "7.3 - Keep Integration Notes: What the alignment sessions agreed, with action items",
        ],
    );
    entry(
        &mut tree,
        "7.1 - Record Model Changes",
        "Every change names its driver (a UCA, scenario or requirement \
         code) so the model stays traceable to the analysis that forced it.",
        &[],
    );
    entry(
        &mut tree,
        "7.2 - Track Validation Tasks",
        "Each model change needs a sign-off path: who validates it, through \
         which channel, by when.",
        &[],
    );
    entry(
        &mut tree,
        "7.3 - Keep Integration Notes",
        "Alignment sessions produce decisions and action items; noting them \
         here keeps the safety case auditable.",
        &[],
    );

    tree
}
