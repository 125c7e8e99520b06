use super::Property;

const ALIGN: &[&str] = &[
    "normal", "stretch", "center", "start", "end", "flex-start", "flex-end", "baseline", "space-between",
    "space-around", "space-evenly",
];
const ALIGN_SELF: &[&str] = &["auto", "normal", "stretch", "center", "start", "end", "flex-start", "flex-end", "baseline"];
const BORDER_STYLE: &[&str] = &["none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset"];
const BORDER_WIDTH: &[&str] = &["thin", "medium", "thick"];
const BREAK: &[&str] = &["auto", "avoid", "always", "all", "page", "column", "left", "right"];
const BOX: &[&str] = &["border-box", "padding-box", "content-box"];
const OVERFLOW: &[&str] = &["visible", "hidden", "clip", "scroll", "auto"];
const SIZE: &[&str] = &["auto", "min-content", "max-content", "fit-content"];
const MAX_SIZE: &[&str] = &["none", "min-content", "max-content", "fit-content"];
const AUTO: &[&str] = &["auto"];
const NONE: &[&str] = &["none"];
const NORMAL: &[&str] = &["normal"];
const OVERSCROLL: &[&str] = &["auto", "contain", "none"];
const BLEND: &[&str] = &[
    "normal", "multiply", "screen", "overlay", "darken", "lighten", "color-dodge", "color-burn", "hard-light",
    "soft-light", "difference", "exclusion", "hue", "saturation", "color", "luminosity",
];
const GRID_LINE: &[&str] = &["auto", "span"];
const SNAP_ALIGN: &[&str] = &["none", "start", "end", "center"];
const PAGE_BREAK: &[&str] = &["auto", "always", "avoid", "left", "right"];

pub(crate) static PROPERTIES: &[Property] = &[
    Property::color("accent-color", "Sets the accent color for user-interface controls.", AUTO),
    Property::new("align-content", "Aligns a flex or grid container's lines along the cross axis.", ALIGN),
    Property::new("align-items", "Sets the default alignment of items along the cross axis.", ALIGN_SELF),
    Property::new("align-self", "Overrides the container's align-items value for this item.", ALIGN_SELF),
    Property::new("all", "Resets all properties except direction and unicode-bidi.", &[]),
    Property::new("animation", "Shorthand for the animation-* properties.", NONE),
    Property::new("animation-delay", "Time to wait before starting an animation.", &[]),
    Property::new("animation-direction", "Whether an animation plays forwards, backwards, or alternates.", &["normal", "reverse", "alternate", "alternate-reverse"]),
    Property::new("animation-duration", "Time an animation takes to complete one cycle.", &[]),
    Property::new("animation-fill-mode", "How styles apply before and after an animation runs.", &["none", "forwards", "backwards", "both"]),
    Property::new("animation-iteration-count", "Number of times an animation cycle plays.", &["infinite"]),
    Property::new("animation-name", "Names of the @keyframes applied to the element.", NONE),
    Property::new("animation-play-state", "Whether an animation is running or paused.", &["running", "paused"]),
    Property::new("animation-timing-function", "Acceleration curve of an animation.", &["ease", "ease-in", "ease-out", "ease-in-out", "linear", "step-start", "step-end"]),
    Property::new("appearance", "Controls native platform styling of form controls.", &["none", "auto", "menulist-button", "textfield"]),
    Property::new("aspect-ratio", "Preferred aspect ratio of the box.", AUTO),
    Property::new("backdrop-filter", "Graphical effects applied to the area behind an element.", NONE),
    Property::new("backface-visibility", "Whether the back face of an element is visible when turned.", &["visible", "hidden"]),
    Property::color("background", "Shorthand for all background properties.", &["none", "repeat", "no-repeat", "fixed", "scroll"]),
    Property::new("background-attachment", "Whether the background scrolls with the element or viewport.", &["scroll", "fixed", "local"]),
    Property::new("background-blend-mode", "How background layers blend with each other.", BLEND),
    Property::new("background-clip", "How far the background extends within the element.", &["border-box", "padding-box", "content-box", "text"]),
    Property::color("background-color", "Background color of an element.", &[]),
    Property::new("background-image", "One or more background images.", NONE),
    Property::new("background-origin", "Origin box for background positioning.", BOX),
    Property::new("background-position", "Initial position of each background image.", &["top", "right", "bottom", "left", "center"]),
    Property::new("background-repeat", "How background images repeat.", &["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"]),
    Property::new("background-size", "Size of the background images.", &["auto", "cover", "contain"]),
    Property::new("block-size", "Size of the element in the block direction.", SIZE),
    Property::color("border", "Shorthand for border width, style and color.", BORDER_STYLE),
    Property::color("border-block", "Shorthand for the block-start and block-end borders.", BORDER_STYLE),
    Property::color("border-block-end", "Shorthand for the block-end border.", BORDER_STYLE),
    Property::color("border-block-start", "Shorthand for the block-start border.", BORDER_STYLE),
    Property::color("border-bottom", "Shorthand for the bottom border.", BORDER_STYLE),
    Property::color("border-bottom-color", "Color of the bottom border.", &[]),
    Property::new("border-bottom-left-radius", "Rounding of the bottom-left corner.", &[]),
    Property::new("border-bottom-right-radius", "Rounding of the bottom-right corner.", &[]),
    Property::new("border-bottom-style", "Line style of the bottom border.", BORDER_STYLE),
    Property::new("border-bottom-width", "Width of the bottom border.", BORDER_WIDTH),
    Property::new("border-collapse", "Whether table cell borders are shared or separate.", &["collapse", "separate"]),
    Property::color("border-color", "Color of all four borders.", &[]),
    Property::new("border-image", "Shorthand for drawing an image as the border.", NONE),
    Property::color("border-inline", "Shorthand for the inline-start and inline-end borders.", BORDER_STYLE),
    Property::color("border-inline-end", "Shorthand for the inline-end border.", BORDER_STYLE),
    Property::color("border-inline-start", "Shorthand for the inline-start border.", BORDER_STYLE),
    Property::color("border-left", "Shorthand for the left border.", BORDER_STYLE),
    Property::color("border-left-color", "Color of the left border.", &[]),
    Property::new("border-left-style", "Line style of the left border.", BORDER_STYLE),
    Property::new("border-left-width", "Width of the left border.", BORDER_WIDTH),
    Property::new("border-radius", "Rounding of all four corners.", &[]),
    Property::color("border-right", "Shorthand for the right border.", BORDER_STYLE),
    Property::color("border-right-color", "Color of the right border.", &[]),
    Property::new("border-right-style", "Line style of the right border.", BORDER_STYLE),
    Property::new("border-right-width", "Width of the right border.", BORDER_WIDTH),
    Property::new("border-spacing", "Distance between adjacent table cell borders.", &[]),
    Property::new("border-style", "Line style of all four borders.", BORDER_STYLE),
    Property::color("border-top", "Shorthand for the top border.", BORDER_STYLE),
    Property::color("border-top-color", "Color of the top border.", &[]),
    Property::new("border-top-left-radius", "Rounding of the top-left corner.", &[]),
    Property::new("border-top-right-radius", "Rounding of the top-right corner.", &[]),
    Property::new("border-top-style", "Line style of the top border.", BORDER_STYLE),
    Property::new("border-top-width", "Width of the top border.", BORDER_WIDTH),
    Property::new("border-width", "Width of all four borders.", BORDER_WIDTH),
    Property::new("bottom", "Offset of a positioned element from the bottom.", AUTO),
    Property::new("box-decoration-break", "How fragments of a box are decorated.", &["slice", "clone"]),
    Property::color("box-shadow", "Shadow effects around an element's frame.", &["none", "inset"]),
    Property::new("box-sizing", "Which box width and height apply to.", &["content-box", "border-box"]),
    Property::new("break-after", "Page, column or region break behavior after the box.", BREAK),
    Property::new("break-before", "Page, column or region break behavior before the box.", BREAK),
    Property::new("break-inside", "Page, column or region break behavior inside the box.", &["auto", "avoid", "avoid-page", "avoid-column"]),
    Property::new("caption-side", "Placement of a table caption.", &["top", "bottom"]),
    Property::color("caret-color", "Color of the text insertion caret.", AUTO),
    Property::new("clear", "Whether an element moves below preceding floats.", &["none", "left", "right", "both", "inline-start", "inline-end"]),
    Property::obsolete("clip", "Clipping region of an absolutely positioned element. Use clip-path.", AUTO),
    Property::new("clip-path", "Clipping region that sets which parts are shown.", &["none", "border-box", "padding-box", "content-box", "margin-box"]),
    Property::color("color", "Foreground color of text and decorations.", &[]),
    Property::new("color-scheme", "Color schemes the element can be rendered in.", &["normal", "light", "dark", "only"]),
    Property::new("column-count", "Number of columns.", AUTO),
    Property::new("column-fill", "How content is balanced across columns.", &["auto", "balance"]),
    Property::new("column-gap", "Gap between columns.", NORMAL),
    Property::color("column-rule", "Shorthand for the line drawn between columns.", BORDER_STYLE),
    Property::color("column-rule-color", "Color of the line between columns.", &[]),
    Property::new("column-rule-style", "Style of the line between columns.", BORDER_STYLE),
    Property::new("column-rule-width", "Width of the line between columns.", BORDER_WIDTH),
    Property::new("column-span", "Whether an element spans all columns.", &["none", "all"]),
    Property::new("column-width", "Ideal column width.", AUTO),
    Property::new("columns", "Shorthand for column-width and column-count.", AUTO),
    Property::new("contain", "Limits layout, paint and style effects to the element subtree.", &["none", "strict", "content", "size", "layout", "style", "paint"]),
    Property::new("container", "Shorthand for container-name and container-type.", NONE),
    Property::new("container-name", "Names the element as a query container.", NONE),
    Property::new("container-type", "Type of containment used for container queries.", &["normal", "size", "inline-size"]),
    Property::new("content", "Generated content for ::before and ::after.", &["normal", "none", "open-quote", "close-quote", "no-open-quote", "no-close-quote"]),
    Property::new("content-visibility", "Whether the element renders its contents at all.", &["visible", "hidden", "auto"]),
    Property::new("counter-increment", "Increments named counters.", NONE),
    Property::new("counter-reset", "Resets named counters.", NONE),
    Property::new("counter-set", "Sets named counters to given values.", NONE),
    Property::new("cursor", "Mouse cursor shown over the element.", &["auto", "default", "none", "pointer", "text", "wait", "move", "not-allowed", "grab", "grabbing", "crosshair", "help", "progress"]),
    Property::new("direction", "Direction of text and table columns.", &["ltr", "rtl"]),
    Property::new("display", "Display type of the element box.", &["none", "block", "inline", "inline-block", "flex", "inline-flex", "grid", "inline-grid", "contents", "flow-root", "table", "table-row", "table-cell", "list-item"]),
    Property::new("empty-cells", "Whether borders show around empty table cells.", &["show", "hide"]),
    Property::color("fill", "Paint used to fill the interior of an SVG shape.", NONE),
    Property::new("filter", "Graphical effects such as blur or color shift.", NONE),
    Property::new("flex", "Shorthand for flex-grow, flex-shrink and flex-basis.", &["none", "auto"]),
    Property::new("flex-basis", "Initial main size of a flex item.", &["auto", "content"]),
    Property::new("flex-direction", "Direction of the flex container's main axis.", &["row", "row-reverse", "column", "column-reverse"]),
    Property::new("flex-flow", "Shorthand for flex-direction and flex-wrap.", &["row", "column", "wrap", "nowrap"]),
    Property::new("flex-grow", "Growth factor of a flex item.", &[]),
    Property::new("flex-shrink", "Shrink factor of a flex item.", &[]),
    Property::new("flex-wrap", "Whether flex items wrap onto multiple lines.", &["nowrap", "wrap", "wrap-reverse"]),
    Property::new("float", "Places an element on the left or right of its container.", &["none", "left", "right", "inline-start", "inline-end"]),
    Property::new("font", "Shorthand for the font-* properties and line-height.", &["caption", "icon", "menu", "message-box", "small-caption", "status-bar"]),
    Property::new("font-display", "How a font face is displayed while it loads.", &["auto", "block", "swap", "fallback", "optional"]),
    Property::new("font-family", "Prioritized list of font family names.", &["serif", "sans-serif", "monospace", "cursive", "fantasy", "system-ui"]),
    Property::new("font-feature-settings", "Low-level control of OpenType features.", NORMAL),
    Property::new("font-kerning", "Use of font kerning information.", &["auto", "normal", "none"]),
    Property::new("font-size", "Size of the font.", &["xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "smaller", "larger"]),
    Property::new("font-stretch", "Normal, condensed or expanded face of a font.", &["normal", "condensed", "expanded", "semi-condensed", "semi-expanded"]),
    Property::new("font-style", "Normal, italic or oblique face of a font.", &["normal", "italic", "oblique"]),
    Property::new("font-variant", "Shorthand for font-variant-* properties.", &["normal", "small-caps"]),
    Property::new("font-variant-numeric", "Glyphs used for numbers and fractions.", &["normal", "tabular-nums", "lining-nums", "oldstyle-nums", "slashed-zero"]),
    Property::new("font-variation-settings", "Low-level control of variable font axes.", NORMAL),
    Property::new("font-weight", "Weight or boldness of the font.", &["normal", "bold", "bolder", "lighter"]),
    Property::new("gap", "Gaps between rows and columns.", NORMAL),
    Property::new("grid", "Shorthand for all explicit and implicit grid properties.", NONE),
    Property::new("grid-area", "Grid item size and location.", GRID_LINE),
    Property::new("grid-auto-columns", "Size of implicitly created grid columns.", SIZE),
    Property::new("grid-auto-flow", "How auto-placed items flow into the grid.", &["row", "column", "dense"]),
    Property::new("grid-auto-rows", "Size of implicitly created grid rows.", SIZE),
    Property::new("grid-column", "Grid item's column start and end.", GRID_LINE),
    Property::new("grid-column-end", "Grid item's column end.", GRID_LINE),
    Property::obsolete("grid-column-gap", "Gap between grid columns. Use column-gap.", &[]),
    Property::new("grid-column-start", "Grid item's column start.", GRID_LINE),
    Property::obsolete("grid-gap", "Gaps between grid rows and columns. Use gap.", &[]),
    Property::new("grid-row", "Grid item's row start and end.", GRID_LINE),
    Property::new("grid-row-end", "Grid item's row end.", GRID_LINE),
    Property::obsolete("grid-row-gap", "Gap between grid rows. Use row-gap.", &[]),
    Property::new("grid-row-start", "Grid item's row start.", GRID_LINE),
    Property::new("grid-template", "Shorthand for grid columns, rows and areas.", NONE),
    Property::new("grid-template-areas", "Named grid areas.", NONE),
    Property::new("grid-template-columns", "Line names and track sizes of grid columns.", &["none", "subgrid", "masonry"]),
    Property::new("grid-template-rows", "Line names and track sizes of grid rows.", &["none", "subgrid", "masonry"]),
    Property::new("height", "Height of the element.", SIZE),
    Property::new("hyphens", "How words are hyphenated when text wraps.", &["none", "manual", "auto"]),
    Property::obsolete("ime-mode", "State of the input method editor for text fields.", &["auto", "normal", "active", "inactive", "disabled"]),
    Property::new("image-rendering", "Algorithm used to scale images.", &["auto", "smooth", "high-quality", "crisp-edges", "pixelated"]),
    Property::new("inline-size", "Size of the element in the inline direction.", SIZE),
    Property::new("inset", "Shorthand for top, right, bottom and left.", AUTO),
    Property::new("inset-block", "Block-start and block-end offsets.", AUTO),
    Property::new("inset-inline", "Inline-start and inline-end offsets.", AUTO),
    Property::new("isolation", "Whether the element creates a new stacking context.", &["auto", "isolate"]),
    Property::new("justify-content", "Distribution of space along the main axis.", ALIGN),
    Property::new("justify-items", "Default justification of items in their area.", ALIGN_SELF),
    Property::new("justify-self", "Justification of this item in its area.", ALIGN_SELF),
    Property::new("left", "Offset of a positioned element from the left.", AUTO),
    Property::new("letter-spacing", "Spacing between text characters.", NORMAL),
    Property::new("line-break", "Line breaking rules for CJK text.", &["auto", "loose", "normal", "strict", "anywhere"]),
    Property::new("line-height", "Height of a line box.", NORMAL),
    Property::new("list-style", "Shorthand for the list-style-* properties.", &["none", "disc", "circle", "square", "decimal", "inside", "outside"]),
    Property::new("list-style-image", "Image used as the list item marker.", NONE),
    Property::new("list-style-position", "Position of the marker relative to the list item.", &["inside", "outside"]),
    Property::new("list-style-type", "Marker of a list item.", &["none", "disc", "circle", "square", "decimal", "lower-alpha", "upper-alpha", "lower-roman", "upper-roman"]),
    Property::new("margin", "Margin on all four sides.", AUTO),
    Property::new("margin-block", "Block-start and block-end margins.", AUTO),
    Property::new("margin-block-end", "Block-end margin.", AUTO),
    Property::new("margin-block-start", "Block-start margin.", AUTO),
    Property::new("margin-bottom", "Bottom margin.", AUTO),
    Property::new("margin-inline", "Inline-start and inline-end margins.", AUTO),
    Property::new("margin-inline-end", "Inline-end margin.", AUTO),
    Property::new("margin-inline-start", "Inline-start margin.", AUTO),
    Property::new("margin-left", "Left margin.", AUTO),
    Property::new("margin-right", "Right margin.", AUTO),
    Property::new("margin-top", "Top margin.", AUTO),
    Property::new("mask", "Shorthand for the mask-* properties.", NONE),
    Property::new("mask-image", "Image used as a mask layer.", NONE),
    Property::new("max-block-size", "Maximum size in the block direction.", MAX_SIZE),
    Property::new("max-height", "Maximum height.", MAX_SIZE),
    Property::new("max-inline-size", "Maximum size in the inline direction.", MAX_SIZE),
    Property::new("max-width", "Maximum width.", MAX_SIZE),
    Property::new("min-block-size", "Minimum size in the block direction.", SIZE),
    Property::new("min-height", "Minimum height.", SIZE),
    Property::new("min-inline-size", "Minimum size in the inline direction.", SIZE),
    Property::new("min-width", "Minimum width.", SIZE),
    Property::new("mix-blend-mode", "How the element blends with its parent and background.", BLEND),
    Property::new("object-fit", "How replaced content fits its box.", &["fill", "contain", "cover", "none", "scale-down"]),
    Property::new("object-position", "Alignment of replaced content in its box.", &["top", "right", "bottom", "left", "center"]),
    Property::new("opacity", "Opacity of the element.", &[]),
    Property::new("order", "Order of a flex or grid item.", &[]),
    Property::color("outline", "Shorthand for outline width, style and color.", BORDER_STYLE),
    Property::color("outline-color", "Color of the outline.", &["invert"]),
    Property::new("outline-offset", "Space between the outline and the border edge.", &[]),
    Property::new("outline-style", "Style of the outline.", &["auto", "none", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset"]),
    Property::new("outline-width", "Width of the outline.", BORDER_WIDTH),
    Property::new("overflow", "Behavior when content overflows the box.", OVERFLOW),
    Property::new("overflow-anchor", "Opts out of scroll anchoring.", &["auto", "none"]),
    Property::new("overflow-wrap", "Whether long words may break to prevent overflow.", &["normal", "break-word", "anywhere"]),
    Property::new("overflow-x", "Horizontal overflow behavior.", OVERFLOW),
    Property::new("overflow-y", "Vertical overflow behavior.", OVERFLOW),
    Property::new("overscroll-behavior", "Behavior when a scroll boundary is reached.", OVERSCROLL),
    Property::new("overscroll-behavior-x", "Horizontal scroll boundary behavior.", OVERSCROLL),
    Property::new("overscroll-behavior-y", "Vertical scroll boundary behavior.", OVERSCROLL),
    Property::new("padding", "Padding on all four sides.", &[]),
    Property::new("padding-block", "Block-start and block-end padding.", &[]),
    Property::new("padding-block-end", "Block-end padding.", &[]),
    Property::new("padding-block-start", "Block-start padding.", &[]),
    Property::new("padding-bottom", "Bottom padding.", &[]),
    Property::new("padding-inline", "Inline-start and inline-end padding.", &[]),
    Property::new("padding-inline-end", "Inline-end padding.", &[]),
    Property::new("padding-inline-start", "Inline-start padding.", &[]),
    Property::new("padding-left", "Left padding.", &[]),
    Property::new("padding-right", "Right padding.", &[]),
    Property::new("padding-top", "Top padding.", &[]),
    Property::obsolete("page-break-after", "Page break after the element. Use break-after.", PAGE_BREAK),
    Property::obsolete("page-break-before", "Page break before the element. Use break-before.", PAGE_BREAK),
    Property::obsolete("page-break-inside", "Page break inside the element. Use break-inside.", &["auto", "avoid"]),
    Property::new("perspective", "Distance between the z=0 plane and the viewer.", NONE),
    Property::new("perspective-origin", "Position the viewer is looking from.", &["top", "right", "bottom", "left", "center"]),
    Property::new("place-content", "Shorthand for align-content and justify-content.", ALIGN),
    Property::new("place-items", "Shorthand for align-items and justify-items.", ALIGN_SELF),
    Property::new("place-self", "Shorthand for align-self and justify-self.", ALIGN_SELF),
    Property::new("pointer-events", "Whether the element can be the target of pointer events.", &["auto", "none"]),
    Property::new("position", "Positioning scheme of the element.", &["static", "relative", "absolute", "fixed", "sticky"]),
    Property::new("quotes", "Quotation marks used by generated content.", &["none", "auto"]),
    Property::new("resize", "Whether and how the element is resizable.", &["none", "both", "horizontal", "vertical", "block", "inline"]),
    Property::new("right", "Offset of a positioned element from the right.", AUTO),
    Property::new("rotate", "Rotation transform applied independently of transform.", NONE),
    Property::new("row-gap", "Gap between rows.", NORMAL),
    Property::new("scale", "Scale transform applied independently of transform.", NONE),
    Property::new("scroll-behavior", "Scrolling behavior for navigation and CSSOM APIs.", &["auto", "smooth"]),
    Property::new("scroll-margin", "Scroll snap area outsets.", &[]),
    Property::new("scroll-padding", "Scroll snap port insets.", AUTO),
    Property::new("scroll-snap-align", "Snap position of the box within the snap container.", SNAP_ALIGN),
    Property::obsolete("scroll-snap-coordinate", "Snap coordinates of the element. Use scroll-snap-align.", NONE),
    Property::obsolete("scroll-snap-destination", "Snap destination of the container. Use scroll-snap-align.", &[]),
    Property::new("scroll-snap-stop", "Whether scrolling may pass over snap positions.", &["normal", "always"]),
    Property::new("scroll-snap-type", "How strictly snap points are enforced.", &["none", "x", "y", "block", "inline", "both", "mandatory", "proximity"]),
    Property::color("scrollbar-color", "Colors of the scrollbar thumb and track.", &["auto"]),
    Property::new("scrollbar-gutter", "Space reserved for the scrollbar.", &["auto", "stable", "both-edges"]),
    Property::new("scrollbar-width", "Thickness of scrollbars.", &["auto", "thin", "none"]),
    Property::color("stroke", "Paint used for the outline of an SVG shape.", NONE),
    Property::new("stroke-width", "Width of the stroke on an SVG shape.", &[]),
    Property::new("tab-size", "Width of tab characters.", &[]),
    Property::new("table-layout", "Algorithm used to lay out table cells.", &["auto", "fixed"]),
    Property::new("text-align", "Horizontal alignment of inline content.", &["left", "right", "center", "justify", "start", "end", "match-parent"]),
    Property::new("text-align-last", "Alignment of the last line of a block.", &["auto", "left", "right", "center", "justify", "start", "end"]),
    Property::color("text-decoration", "Shorthand for text decoration lines, style and color.", &["none", "underline", "overline", "line-through"]),
    Property::color("text-decoration-color", "Color of text decorations.", &[]),
    Property::new("text-decoration-line", "Kind of text decoration.", &["none", "underline", "overline", "line-through"]),
    Property::new("text-decoration-style", "Style of text decoration lines.", &["solid", "double", "dotted", "dashed", "wavy"]),
    Property::new("text-decoration-thickness", "Thickness of text decoration lines.", &["auto", "from-font"]),
    Property::color("text-emphasis", "Shorthand for emphasis marks.", NONE),
    Property::new("text-indent", "Indentation of the first line of text.", &["hanging", "each-line"]),
    Property::new("text-overflow", "How hidden overflowing content is signaled.", &["clip", "ellipsis"]),
    Property::new("text-rendering", "Rendering engine optimization hints for text.", &["auto", "optimizeSpeed", "optimizeLegibility", "geometricPrecision"]),
    Property::color("text-shadow", "Shadows added to text.", NONE),
    Property::new("text-transform", "Capitalization of text.", &["none", "capitalize", "uppercase", "lowercase", "full-width"]),
    Property::new("text-underline-offset", "Offset of the underline from its default position.", AUTO),
    Property::new("text-wrap", "How text inside an element wraps.", &["wrap", "nowrap", "balance", "pretty", "stable"]),
    Property::new("top", "Offset of a positioned element from the top.", AUTO),
    Property::new("touch-action", "How touch input may manipulate the element.", &["auto", "none", "pan-x", "pan-y", "manipulation", "pinch-zoom"]),
    Property::new("transform", "Transforms applied to the element.", NONE),
    Property::new("transform-origin", "Origin of the element's transformations.", &["top", "right", "bottom", "left", "center"]),
    Property::new("transform-style", "Whether children are positioned in 3D space.", &["flat", "preserve-3d"]),
    Property::new("transition", "Shorthand for the transition-* properties.", &["none", "all"]),
    Property::new("transition-delay", "Time to wait before a transition starts.", &[]),
    Property::new("transition-duration", "Time a transition takes.", &[]),
    Property::new("transition-property", "Properties a transition applies to.", &["none", "all"]),
    Property::new("transition-timing-function", "Acceleration curve of a transition.", &["ease", "ease-in", "ease-out", "ease-in-out", "linear", "step-start", "step-end"]),
    Property::new("translate", "Translation transform applied independently of transform.", NONE),
    Property::new("unicode-bidi", "Handling of bidirectional text.", &["normal", "embed", "isolate", "bidi-override", "isolate-override", "plaintext"]),
    Property::new("user-select", "Whether the user can select text.", &["auto", "none", "text", "all", "contain"]),
    Property::new("vertical-align", "Vertical alignment of an inline or table-cell box.", &["baseline", "sub", "super", "text-top", "text-bottom", "middle", "top", "bottom"]),
    Property::new("visibility", "Shows or hides an element without changing layout.", &["visible", "hidden", "collapse"]),
    Property::new("white-space", "How white space inside an element is handled.", &["normal", "nowrap", "pre", "pre-wrap", "pre-line", "break-spaces"]),
    Property::new("widows", "Minimum lines left at the top of a page or column.", &[]),
    Property::new("width", "Width of the element.", SIZE),
    Property::new("will-change", "Hints to the browser about expected changes.", &["auto", "scroll-position", "contents", "transform", "opacity"]),
    Property::new("word-break", "Where lines may break inside words.", &["normal", "break-all", "keep-all", "break-word"]),
    Property::new("word-spacing", "Spacing between words.", NORMAL),
    Property::new("word-wrap", "Legacy name of overflow-wrap.", &["normal", "break-word", "anywhere"]),
    Property::new("writing-mode", "Whether lines are laid out horizontally or vertically.", &["horizontal-tb", "vertical-rl", "vertical-lr"]),
    Property::new("z-index", "Stacking order of a positioned element.", AUTO),
    Property::new("zoom", "Magnification level of the element.", &["normal", "reset"]),
];
