//! Component lifecycle hooks

pub const LIFECYCLE_HOOKS: [&str; 8] = [
    "OnChanges",
    "OnInit",
    "DoCheck",
    "AfterContentInit",
    "AfterContentChecked",
    "AfterViewInit",
    "AfterViewChecked",
    "OnDestroy",
];

/// Hook name for an `implements` entry
pub fn hook_for_interface(name: &str) -> Option<&'static str> {
    let name = name.trim();
    LIFECYCLE_HOOKS.iter().copied().find(|hook| *hook == name)
}

/// Hook name for an `ng<Hook>` method
pub fn hook_for_method(name: &str) -> Option<&'static str> {
    let hook = name.strip_prefix("ng")?;
    hook_for_interface(hook)
}
