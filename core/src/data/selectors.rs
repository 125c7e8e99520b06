use super::Entry;

pub(crate) static PSEUDO_CLASSES: &[Entry] = &[
    Entry::new("active", "Element being activated by the user."),
    Entry::new("any-link", "Any link, visited or not."),
    Entry::new("autofill", "Input whose value was autofilled by the browser."),
    Entry::new("checked", "Checked radio, checkbox or selected option."),
    Entry::new("default", "Default form element in a group."),
    Entry::new("defined", "Element that has been defined."),
    Entry::new("dir", "Element with the given text directionality."),
    Entry::new("disabled", "Disabled form element."),
    Entry::new("empty", "Element with no children."),
    Entry::new("enabled", "Enabled form element."),
    Entry::new("first", "First page of a printed document."),
    Entry::new("first-child", "First element among its siblings."),
    Entry::new("first-of-type", "First element of its type among its siblings."),
    Entry::new("focus", "Element that has focus."),
    Entry::new("focus-visible", "Focused element where the focus should be visible."),
    Entry::new("focus-within", "Element that has or contains focus."),
    Entry::new("fullscreen", "Element currently displayed in fullscreen mode."),
    Entry::new("has", "Element with a descendant matching the relative selector."),
    Entry::new("host", "Shadow host of the shadow DOM containing the CSS."),
    Entry::new("hover", "Element the pointer is over."),
    Entry::new("in-range", "Input whose value is inside its range limits."),
    Entry::new("indeterminate", "Form element in an indeterminate state."),
    Entry::new("invalid", "Form element whose contents fail validation."),
    Entry::new("is", "Element matching any selector in the list."),
    Entry::new("lang", "Element in the given language."),
    Entry::new("last-child", "Last element among its siblings."),
    Entry::new("last-of-type", "Last element of its type among its siblings."),
    Entry::new("left", "Left-hand pages of a printed document."),
    Entry::new("link", "Unvisited link."),
    Entry::new("not", "Element not matching any selector in the list."),
    Entry::new("nth-child", "Element by position among its siblings."),
    Entry::new("nth-last-child", "Element by position among its siblings, counting from the end."),
    Entry::new("nth-last-of-type", "Element by position among siblings of its type, counting from the end."),
    Entry::new("nth-of-type", "Element by position among siblings of its type."),
    Entry::new("only-child", "Element without siblings."),
    Entry::new("only-of-type", "Element without siblings of the same type."),
    Entry::new("optional", "Form element without the required attribute."),
    Entry::new("out-of-range", "Input whose value is outside its range limits."),
    Entry::new("placeholder-shown", "Input currently displaying placeholder text."),
    Entry::new("read-only", "Element not editable by the user."),
    Entry::new("read-write", "Element editable by the user."),
    Entry::new("required", "Form element with the required attribute."),
    Entry::new("right", "Right-hand pages of a printed document."),
    Entry::new("root", "Root element of the document."),
    Entry::new("scope", "Elements that are a reference point for selectors."),
    Entry::new("target", "Element whose id matches the URL fragment."),
    Entry::new("user-invalid", "Invalid form element after user interaction."),
    Entry::new("valid", "Form element whose contents validate."),
    Entry::new("visited", "Link that has been visited."),
    Entry::new("where", "Like :is() but with zero specificity."),
    Entry::obsolete("matches", "Old name of :is()."),
    Entry::obsolete("-moz-any", "Prefixed predecessor of :is()."),
];

pub(crate) static PSEUDO_ELEMENTS: &[Entry] = &[
    Entry::new("after", "Generated last child of the element."),
    Entry::new("backdrop", "Box behind a fullscreen or modal element."),
    Entry::new("before", "Generated first child of the element."),
    Entry::new("cue", "WebVTT cues in a media element."),
    Entry::new("file-selector-button", "Button of a file input."),
    Entry::new("first-letter", "First letter of the first line of a block."),
    Entry::new("first-line", "First line of a block."),
    Entry::new("grammar-error", "Text flagged as grammatically incorrect."),
    Entry::new("highlight", "Custom highlight registered with the highlight registry."),
    Entry::new("marker", "Marker box of a list item."),
    Entry::new("part", "Element in a shadow tree with a matching part attribute."),
    Entry::new("placeholder", "Placeholder text of an input."),
    Entry::new("selection", "Portion of the document selected by the user."),
    Entry::new("slotted", "Elements placed into a slot."),
    Entry::new("spelling-error", "Text flagged as misspelled."),
    Entry::new("target-text", "Text scrolled to by a text fragment."),
];
