//! Static multiple-choice questions, keyed by skill.

use crate::content::QuizQuestion;

/// Topic used when nothing matches.
pub const FALLBACK_TOPIC: &str = "JavaScript";

struct BankQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
    explanation: &'static str,
    code: Option<&'static str>,
}

impl BankQuestion {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer,
            explanation: self.explanation.to_string(),
            code: self.code.map(str::to_string),
        }
    }
}

const REACT: &[BankQuestion] = &[
    BankQuestion {
        question: "What does the dependency array of useEffect control?",
        options: [
            "Which props the component receives",
            "When the effect re-runs",
            "The order hooks are called in",
            "Which state updates are batched",
        ],
        correct_answer: 1,
        explanation: "The effect re-runs only when a value in the dependency array changes.",
        code: None,
    },
    BankQuestion {
        question: "Why should list items rendered with map have a key prop?",
        options: [
            "Keys make items focusable",
            "Keys are required for CSS selectors",
            "Keys let React match items between renders",
            "Keys enable server-side rendering",
        ],
        correct_answer: 2,
        explanation: "Stable keys let the reconciler tell which items moved, changed or were removed.",
        code: None,
    },
    BankQuestion {
        question: "What is logged after clicking the button once?",
        options: ["0", "1", "2", "undefined"],
        correct_answer: 0,
        explanation: "State updates are applied on the next render; `count` in this closure is still 0.",
        code: Some(
            "const [count, setCount] = useState(0);\n\
             const onClick = () => { setCount(count + 1); console.log(count); };",
        ),
    },
    BankQuestion {
        question: "Which hook memoizes a computed value between renders?",
        options: ["useRef", "useMemo", "useCallback", "useReducer"],
        correct_answer: 1,
        explanation: "useMemo caches a value; useCallback caches a function.",
        code: None,
    },
    BankQuestion {
        question: "What does lifting state up mean?",
        options: [
            "Moving state to the closest common parent",
            "Storing state in localStorage",
            "Converting class state to hooks",
            "Using a global store for every value",
        ],
        correct_answer: 0,
        explanation: "Siblings share state by moving it to their nearest common ancestor.",
        code: None,
    },
];

const JAVASCRIPT: &[BankQuestion] = &[
    BankQuestion {
        question: "What does `typeof null` evaluate to?",
        options: ["\"null\"", "\"undefined\"", "\"object\"", "\"number\""],
        correct_answer: 2,
        explanation: "A long-standing quirk: typeof null is \"object\".",
        code: None,
    },
    BankQuestion {
        question: "What is the difference between `==` and `===`?",
        options: [
            "None, they are aliases",
            "`===` compares without type coercion",
            "`==` is only for numbers",
            "`===` compares references only",
        ],
        correct_answer: 1,
        explanation: "Strict equality does not coerce operand types.",
        code: None,
    },
    BankQuestion {
        question: "What does this print?",
        options: ["0 1 2", "3 3 3", "undefined x3", "It throws"],
        correct_answer: 0,
        explanation: "`let` creates a fresh binding per loop iteration.",
        code: Some("for (let i = 0; i < 3; i++) {\n  setTimeout(() => console.log(i));\n}"),
    },
    BankQuestion {
        question: "Which array method returns a new array without mutating the original?",
        options: ["push", "splice", "sort", "map"],
        correct_answer: 3,
        explanation: "map builds a new array; the others mutate in place.",
        code: None,
    },
    BankQuestion {
        question: "What does an async function always return?",
        options: ["A callback", "A Promise", "undefined", "A generator"],
        correct_answer: 1,
        explanation: "Return values are wrapped in a resolved Promise.",
        code: None,
    },
];

const PYTHON: &[BankQuestion] = &[
    BankQuestion {
        question: "Why is a mutable default argument risky?",
        options: [
            "It is evaluated once and shared between calls",
            "It is copied on every call",
            "It cannot be modified",
            "It raises a SyntaxError",
        ],
        correct_answer: 0,
        explanation: "Defaults are evaluated at definition time, so mutations persist across calls.",
        code: Some("def append(item, items=[]):\n    items.append(item)\n    return items"),
    },
    BankQuestion {
        question: "What does a list comprehension `[x * 2 for x in range(3)]` produce?",
        options: ["[2, 4, 6]", "[0, 2, 4]", "[0, 1, 2]", "(0, 2, 4)"],
        correct_answer: 1,
        explanation: "range(3) yields 0, 1, 2.",
        code: None,
    },
    BankQuestion {
        question: "Which type is immutable?",
        options: ["list", "dict", "set", "tuple"],
        correct_answer: 3,
        explanation: "Tuples cannot be changed after creation.",
        code: None,
    },
    BankQuestion {
        question: "What does the `with` statement guarantee?",
        options: [
            "The block runs in a new thread",
            "The context manager's exit logic runs",
            "Exceptions are suppressed",
            "Variables are scoped to the block",
        ],
        correct_answer: 1,
        explanation: "__exit__ runs even when the block raises.",
        code: None,
    },
    BankQuestion {
        question: "What does `yield` turn a function into?",
        options: ["A coroutine object only", "A class", "A generator function", "A lambda"],
        correct_answer: 2,
        explanation: "Calling it returns a generator that produces values lazily.",
        code: None,
    },
];

const TYPESCRIPT: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the main difference between `unknown` and `any`?",
        options: [
            "They are identical",
            "`unknown` must be narrowed before use",
            "`any` cannot hold objects",
            "`unknown` only holds primitives",
        ],
        correct_answer: 1,
        explanation: "unknown is type-safe: you must narrow it before operating on it.",
        code: None,
    },
    BankQuestion {
        question: "What does `Partial<T>` do?",
        options: [
            "Makes every property optional",
            "Removes every method",
            "Makes every property readonly",
            "Picks the first property",
        ],
        correct_answer: 0,
        explanation: "Partial maps each property of T to optional.",
        code: None,
    },
    BankQuestion {
        question: "What is a discriminated union?",
        options: [
            "A union of numeric literals",
            "A union whose members share a literal tag field",
            "An enum with string values",
            "An intersection of interfaces",
        ],
        correct_answer: 1,
        explanation: "A shared literal field lets the compiler narrow to one member.",
        code: None,
    },
    BankQuestion {
        question: "What is the type of `x` here?",
        options: ["string", "\"hello\"", "any", "String"],
        correct_answer: 1,
        explanation: "A const binding of a string literal keeps the literal type.",
        code: Some("const x = \"hello\";"),
    },
    BankQuestion {
        question: "Where do TypeScript types exist at runtime?",
        options: [
            "In the emitted JavaScript",
            "In a separate .d.ts runtime",
            "Nowhere, they are erased",
            "Only in strict mode",
        ],
        correct_answer: 2,
        explanation: "Types are erased during compilation.",
        code: None,
    },
];

const NODE: &[BankQuestion] = &[
    BankQuestion {
        question: "What runs first?",
        options: [
            "setTimeout callback",
            "process.nextTick callback",
            "setImmediate callback",
            "They are unordered",
        ],
        correct_answer: 1,
        explanation: "nextTick callbacks run before the event loop continues.",
        code: Some(
            "setTimeout(() => console.log('timeout'));\n\
             process.nextTick(() => console.log('tick'));",
        ),
    },
    BankQuestion {
        question: "Why avoid synchronous fs calls in a request handler?",
        options: [
            "They are deprecated",
            "They block the event loop",
            "They cannot read JSON",
            "They leak file descriptors",
        ],
        correct_answer: 1,
        explanation: "The single event loop thread stalls for every request.",
        code: None,
    },
    BankQuestion {
        question: "What does `module.exports` define?",
        options: [
            "Environment variables",
            "The value returned by require()",
            "The package version",
            "Global variables",
        ],
        correct_answer: 1,
        explanation: "require() returns the module's exports object.",
        code: None,
    },
    BankQuestion {
        question: "Which stream type can be both read from and written to?",
        options: ["Readable", "Writable", "Duplex", "Pipe"],
        correct_answer: 2,
        explanation: "Duplex streams implement both sides.",
        code: None,
    },
    BankQuestion {
        question: "What is package-lock.json for?",
        options: [
            "Locking the project against edits",
            "Recording exact installed dependency versions",
            "Storing npm credentials",
            "Listing scripts",
        ],
        correct_answer: 1,
        explanation: "It pins the resolved dependency tree for reproducible installs.",
        code: None,
    },
];

const DOCKER: &[BankQuestion] = &[
    BankQuestion {
        question: "What is the difference between an image and a container?",
        options: [
            "None",
            "A container is a running instance of an image",
            "An image is a running container",
            "Images only exist on registries",
        ],
        correct_answer: 1,
        explanation: "Images are templates; containers are their running instances.",
        code: None,
    },
    BankQuestion {
        question: "Why order Dockerfile instructions from least to most frequently changed?",
        options: [
            "To reduce image layers",
            "To maximize build cache reuse",
            "It is required by the syntax",
            "To make images smaller",
        ],
        correct_answer: 1,
        explanation: "A changed layer invalidates the cache for every layer after it.",
        code: None,
    },
    BankQuestion {
        question: "What does a multi-stage build help with?",
        options: [
            "Running several containers at once",
            "Keeping build tools out of the final image",
            "Sharing volumes",
            "Scaling services",
        ],
        correct_answer: 1,
        explanation: "Only the artifacts copied into the last stage end up in the image.",
        code: None,
    },
    BankQuestion {
        question: "Which instruction sets the default command of a container?",
        options: ["RUN", "CMD", "FROM", "COPY"],
        correct_answer: 1,
        explanation: "RUN executes at build time; CMD is the default at run time.",
        code: None,
    },
    BankQuestion {
        question: "How do you persist data beyond a container's lifetime?",
        options: ["EXPOSE", "A volume", "ENV", "A larger image"],
        correct_answer: 1,
        explanation: "Volumes live outside the container's writable layer.",
        code: None,
    },
];

const GIT: &[BankQuestion] = &[
    BankQuestion {
        question: "What does `git rebase` do?",
        options: [
            "Deletes a branch",
            "Replays commits on top of another base",
            "Creates a merge commit",
            "Resets the working tree",
        ],
        correct_answer: 1,
        explanation: "Rebase rewrites commits so they follow the new base.",
        code: None,
    },
    BankQuestion {
        question: "Which command stages changes for the next commit?",
        options: ["git commit", "git add", "git push", "git stash"],
        correct_answer: 1,
        explanation: "git add moves changes into the index.",
        code: None,
    },
    BankQuestion {
        question: "How do you undo a pushed commit without rewriting history?",
        options: ["git reset --hard", "git revert", "git commit --amend", "git rebase -i"],
        correct_answer: 1,
        explanation: "revert adds a new commit that inverts the old one.",
        code: None,
    },
    BankQuestion {
        question: "What does `git stash` do?",
        options: [
            "Deletes uncommitted changes",
            "Shelves uncommitted changes for later",
            "Pushes to a hidden remote",
            "Creates a tag",
        ],
        correct_answer: 1,
        explanation: "Stashed changes can be re-applied with git stash pop.",
        code: None,
    },
    BankQuestion {
        question: "What is a fast-forward merge?",
        options: [
            "A merge that skips conflicts",
            "Moving the branch pointer when no divergence exists",
            "A squash merge",
            "A merge of only the latest commit",
        ],
        correct_answer: 1,
        explanation: "With no divergent commits, the branch pointer simply advances.",
        code: None,
    },
];

/// Topics in lookup order.
const TOPICS: &[(&str, &[BankQuestion])] = &[
    ("React", REACT),
    ("JavaScript", JAVASCRIPT),
    ("Python", PYTHON),
    ("TypeScript", TYPESCRIPT),
    ("Node.js", NODE),
    ("Docker", DOCKER),
    ("Git", GIT),
];

/// Resolve a skill name to a bank topic: exact match, then case-insensitive
/// substring in either direction, then [`FALLBACK_TOPIC`].
pub fn topic_for(skill_name: &str) -> &'static str {
    if let Some(&(topic, _)) = TOPICS.iter().find(|(topic, _)| *topic == skill_name) {
        return topic;
    }

    let wanted = skill_name.trim().to_lowercase();
    if !wanted.is_empty() {
        let fuzzy = TOPICS.iter().find(|(topic, _)| {
            let topic = topic.to_lowercase();
            topic.contains(&wanted) || wanted.contains(&topic)
        });
        if let Some(&(topic, _)) = fuzzy {
            return topic;
        }
    }

    FALLBACK_TOPIC
}

/// The first `count` questions for the topic matching `skill_name`.
///
/// Each topic holds five questions, so larger counts return the whole topic.
pub fn questions_for(skill_name: &str, count: usize) -> Vec<QuizQuestion> {
    let topic = topic_for(skill_name);
    let Some((_, questions)) = TOPICS.iter().find(|(name, _)| *name == topic) else {
        return Vec::new();
    };

    if count > questions.len() {
        tracing::debug!(
            topic,
            requested = count,
            available = questions.len(),
            "Question bank has fewer questions than requested"
        );
    }

    questions
        .iter()
        .take(count)
        .map(BankQuestion::to_question)
        .collect()
}
