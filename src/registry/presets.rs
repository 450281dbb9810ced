//! Built-in preset definitions.
//!
//! Templates are rendered with the `{placeholder}` engine, so literal braces
//! must be written as `{{` and `}}`.

use super::{ExtensionPolicy, Preset};

pub const REACT_COMPONENT: &str = "react_component";
pub const EXPRESS_API: &str = "express_api";
pub const PYTHON_SCRIPT: &str = "python_script";
pub const UNITY_MINIGAME: &str = "unity_minigame";
pub const GODOT_MINIGAME: &str = "godot_minigame";

/// Registered preset names, sorted. Also the `--preset` possible values.
pub const PRESET_NAMES: [&str; 5] = [
    EXPRESS_API,
    GODOT_MINIGAME,
    PYTHON_SCRIPT,
    REACT_COMPONENT,
    UNITY_MINIGAME,
];

const REACT_COMPONENT_TEMPLATE: &str = r#"
Build a {framework} {kind} named {component_name} using {lang}.

Task: {spec}.

Files to produce:
- src/{component_name}.{ext}: the {kind} implementation as the default export.
- src/{component_name}.{test_ext}: tests with React Testing Library covering
  the initial render and every interaction described in the task.

Requirements:
- Function components and hooks only; no class components.
- Type every prop explicitly when the language supports it.
- Keep state local unless the task says otherwise; no global stores.
- Use semantic HTML and accessible labels so tests can query by role.
"#;

const EXPRESS_API_TEMPLATE: &str = r#"
Build a Node.js HTTP API with Express.

Task: {spec}.

Requirements:
- One router module per resource, mounted from a single app module.
- Validate every request body and parameter before use.
- Respond with JSON; errors use the shape {{ "error": "<message>" }} and a
  matching status code.
- Export the app separately from the listener so tests can import it.
- Tests with Jest and Supertest for each route, including failure cases.
"#;

const PYTHON_SCRIPT_TEMPLATE: &str = r#"
Write a Python script.

Task: {spec}.

Requirements:
- Python 3.10 or newer, standard library unless the task requires more.
- Parse command-line arguments with argparse and guard the entry point with
  `if __name__ == "__main__":`.
- Type hints and a docstring on every public function.
- Exit with a non-zero status and a message on stderr for invalid input.
- pytest tests in a separate test file for the {kind}'s core logic.
"#;

const UNITY_MINIGAME_TEMPLATE: &str = r#"
Build a small Unity minigame in C#.

Task: {spec}.

Requirements:
- Target Unity 2022 LTS with the built-in input system.
- One MonoBehaviour per responsibility (player, spawner, score, game state).
- Serialize tunable values as fields so they can be adjusted in the Inspector.
- Describe the scene setup (GameObjects, components, tags) step by step.
- Edit-mode tests with the Unity Test Framework for the game rules.
"#;

const GODOT_MINIGAME_TEMPLATE: &str = r#"
Build a small Godot 4 minigame in GDScript.

Task: {spec}.

Requirements:
- Static typing in every script.
- One scene per entity plus a main scene; list each node tree explicitly.
- Use signals for communication between nodes instead of direct references.
- Declare input actions and describe the Project Settings they need.
- Tests with GUT for the game rules.
"#;

/// All built-in presets.
pub(super) fn builtin() -> [Preset; 5] {
    [
        Preset {
            name: REACT_COMPONENT,
            description: "React component with a colocated test file",
            template: REACT_COMPONENT_TEMPLATE,
            defaults: &[("kind", "component"), ("framework", "react")],
            extensions: ExtensionPolicy::ByLanguage,
        },
        Preset {
            name: EXPRESS_API,
            description: "Express HTTP API with route tests",
            template: EXPRESS_API_TEMPLATE,
            defaults: &[],
            extensions: ExtensionPolicy::Fixed,
        },
        Preset {
            name: PYTHON_SCRIPT,
            description: "Standalone Python command-line script",
            template: PYTHON_SCRIPT_TEMPLATE,
            defaults: &[("kind", "script")],
            extensions: ExtensionPolicy::Fixed,
        },
        Preset {
            name: UNITY_MINIGAME,
            description: "Unity minigame in C#",
            template: UNITY_MINIGAME_TEMPLATE,
            defaults: &[],
            extensions: ExtensionPolicy::Fixed,
        },
        Preset {
            name: GODOT_MINIGAME,
            description: "Godot 4 minigame in GDScript",
            template: GODOT_MINIGAME_TEMPLATE,
            defaults: &[],
            extensions: ExtensionPolicy::Fixed,
        },
    ]
}
