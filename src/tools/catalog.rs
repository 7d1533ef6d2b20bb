// ABOUTME: Static catalog of the 29 Arvo coaching tools exposed over MCP
// ABOUTME: Declares each tool's description, argument schema, and read/write classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo

use crate::mcp::schema::PropertySchema;

use super::registry::ToolDescriptor;

/// Every tool served by this bridge, in `tools/list` order.
#[must_use]
pub fn arvo_tools() -> Vec<ToolDescriptor> {
    let mut tools = read_only_tools();
    tools.extend(write_tools());
    tools
}

// === READ-ONLY TOOLS (19) ===

#[allow(clippy::too_many_lines)] // Declarative catalog data
fn read_only_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::read_only(
            "get_user_profile",
            "Get the user's fitness profile including name, age, experience level, training approach, weak points, equipment, caloric phase, and preferences.",
        ),
        ToolDescriptor::read_only(
            "get_active_split",
            "Get the user's active training split plan including session types, frequency, current cycle day, and volume distribution.",
        ),
        ToolDescriptor::read_only(
            "get_recent_workouts",
            "Get the most recent completed workouts with stats including duration, volume, sets, mental readiness, and exercises.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of recent workouts to retrieve (default: 5, max: 10)"),
        ),
        ToolDescriptor::read_only(
            "get_workout_for_day",
            "Get the workout for a specific cycle day with all exercise details: exercises, target weights, reps, RIR. If cycle_day is omitted, returns today's workout.",
        )
        .property(
            "cycle_day",
            PropertySchema::number(
                "Day of the cycle (1 to N). If omitted, returns current day workout.",
            ),
        ),
        ToolDescriptor::read_only(
            "get_workout_stats",
            "Get aggregated workout statistics: total workouts completed, total volume, total sets, average duration, average mental readiness, weekly frequency.",
        )
        .property(
            "days",
            PropertySchema::number("Number of days to consider for stats (default: 30, max: 90)"),
        ),
        ToolDescriptor::read_only(
            "get_active_insights",
            "Get the user's active insights: reported pain, technical issues, recovery notes, equipment observations.",
        ),
        ToolDescriptor::read_only(
            "get_personal_records",
            "Get the user's Personal Records (PRs) for each exercise: max weight, reps, estimated 1RM.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of PRs to retrieve (default: 10, max: 20)"),
        ),
        ToolDescriptor::read_only(
            "get_exercise_progress",
            "Get the progression trend for a specific exercise: estimated 1RM over time, weight, reps.",
        )
        .required_property(
            "exercise_name",
            PropertySchema::string(
                "Name of the exercise (e.g., 'squat', 'bench press', 'deadlift')",
            ),
        )
        .property(
            "days",
            PropertySchema::number("Number of days to consider (default: 60, max: 90)"),
        ),
        ToolDescriptor::read_only(
            "get_exercise_video",
            "Get a demonstration video for an exercise from MuscleWiki. Use when the user asks how to perform an exercise.",
        )
        .required_property(
            "exercise_name",
            PropertySchema::string(
                "Name of the exercise in English (e.g., 'bench press', 'squat', 'hip thrust')",
            ),
        ),
        ToolDescriptor::read_only(
            "get_volume_by_muscle",
            "Get the volume distribution (sets) by muscle group in the current training cycle.",
        ),
        ToolDescriptor::read_only(
            "get_coach_info",
            "Get information about the user's assigned coach: name, bio, specializations, certifications, years of experience.",
        ),
        ToolDescriptor::read_only(
            "get_coach_notes",
            "Get notes from the user's coach including training advice and personalized recommendations.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of notes to retrieve (default: 5)"),
        ),
        ToolDescriptor::read_only(
            "get_approach_details",
            "Get details about the user's training methodology: approach name, description, principles, progression scheme.",
        ),
        ToolDescriptor::read_only(
            "get_body_progress",
            "Get the user's body composition progress: weight changes, measurements over time.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of progress checks to retrieve (default: 10)"),
        ),
        ToolDescriptor::read_only(
            "get_cycle_history",
            "Get the user's training cycle history: completed cycles, PRs achieved, volume milestones.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of cycles to retrieve (default: 5)"),
        ),
        ToolDescriptor::read_only(
            "get_booking_info",
            "Get the user's booking information for personal training sessions with their coach.",
        ),
        ToolDescriptor::read_only(
            "get_ai_memory",
            "Get the AI coach's memory about the user: saved notes, preferences, and important context.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of memories to retrieve (default: 10)"),
        ),
        ToolDescriptor::read_only(
            "get_caloric_history",
            "Get the user's caloric phase history: bulk, cut, maintenance periods over time.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of history entries to retrieve (default: 10)"),
        ),
        ToolDescriptor::read_only(
            "get_approach_history",
            "Get the user's training approach history: methodology changes over time.",
        )
        .property(
            "limit",
            PropertySchema::number("Number of history entries to retrieve (default: 5)"),
        ),
    ]
}

// === WRITE TOOLS (10) ===

#[allow(clippy::too_many_lines)] // Declarative catalog data
fn write_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::write(
            "save_memory",
            "Save a note to AI memory for future reference. Use to remember important user preferences, goals, or context.",
        )
        .required_property("title", PropertySchema::string("Short title for the memory"))
        .required_property(
            "description",
            PropertySchema::string("Detailed content of the memory"),
        )
        .required_property(
            "category",
            PropertySchema::string(
                "Category for organization (e.g., 'preference', 'goal', 'limitation')",
            ),
        ),
        ToolDescriptor::write(
            "update_caloric_phase",
            "Update the user's current caloric phase (bulk, cut, maintain, or recomp).",
        )
        .required_property(
            "phase",
            PropertySchema::string_enum(
                &["bulk", "cut", "maintain", "recomp"],
                "The new caloric phase",
            ),
        ),
        ToolDescriptor::write(
            "update_weak_points",
            "Update the user's weak points (muscle groups to prioritize). Can set, add, or remove muscles.",
        )
        .required_property(
            "muscles",
            PropertySchema::string_array(
                "List of muscle groups (e.g., ['chest', 'shoulders', 'back'])",
            ),
        )
        .required_property(
            "action",
            PropertySchema::string_enum(
                &["set", "add", "remove"],
                "Action to perform: set replaces all, add appends, remove deletes",
            ),
        ),
        ToolDescriptor::write(
            "report_physical_issue",
            "Report a physical issue or pain that should be considered for workout adjustments.",
        )
        .required_property(
            "body_part",
            PropertySchema::string("Body part affected (e.g., 'shoulder', 'lower back', 'knee')"),
        )
        .required_property("side", PropertySchema::string("'left', 'right', or 'both'"))
        .required_property(
            "severity",
            PropertySchema::string("'mild', 'moderate', or 'severe'"),
        )
        .required_property(
            "description",
            PropertySchema::string("Detailed description of the issue"),
        ),
        ToolDescriptor::write(
            "skip_exercise",
            "Skip an exercise in today's workout due to equipment issues, injury, or other reasons.",
        )
        .required_property(
            "exercise_name",
            PropertySchema::string("Name of the exercise to skip"),
        )
        .property("reason", PropertySchema::string("Reason for skipping (optional)")),
        ToolDescriptor::write(
            "generate_workout",
            "Generate a new workout for a specific cycle day. Creates exercises based on training approach.",
        )
        .property(
            "cycle_day",
            PropertySchema::number("Day of the cycle to generate workout for (default: today)"),
        ),
        ToolDescriptor::write(
            "update_equipment",
            "Update the user's available equipment list. Can add, remove, or set equipment.",
        )
        .required_property(
            "equipment",
            PropertySchema::string_array(
                "List of equipment (e.g., ['barbell', 'dumbbells', 'pull_up_bar'])",
            ),
        )
        .required_property(
            "action",
            PropertySchema::string_enum(
                &["add", "remove", "set"],
                "Action to perform on equipment list",
            ),
        ),
        ToolDescriptor::write("add_exercise", "Add a new exercise to today's workout.")
            .required_property(
                "exercise_name",
                PropertySchema::string("Name of the exercise to add"),
            )
            .property("sets", PropertySchema::number("Number of sets (default: 3)"))
            .property(
                "reps",
                PropertySchema::number("Target reps per set (default: based on approach)"),
            ),
        ToolDescriptor::write(
            "swap_exercise",
            "Request an alternative exercise due to equipment or preference. Returns suggestions for swaps.",
        )
        .required_property(
            "exercise_name",
            PropertySchema::string("Name of the exercise to swap out"),
        )
        .property(
            "reason",
            PropertySchema::string(
                "Reason for swap (e.g., 'equipment', 'injury', 'preference')",
            ),
        )
        .property(
            "custom_reason",
            PropertySchema::string("Custom reason if not in predefined list"),
        ),
        ToolDescriptor::write(
            "apply_swap",
            "Apply a previously suggested exercise swap to the workout.",
        )
        .required_property(
            "old_exercise_name",
            PropertySchema::string("Name of the exercise being replaced"),
        )
        .required_property(
            "new_exercise_name",
            PropertySchema::string("Name of the new exercise"),
        )
        .property(
            "sets",
            PropertySchema::number("Number of sets for new exercise (optional)"),
        )
        .property(
            "reps",
            PropertySchema::number("Target reps for new exercise (optional)"),
        )
        .property(
            "reason",
            PropertySchema::string("Reason for the swap (optional)"),
        ),
    ]
}
