pub(super) const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

pub(super) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace", "Guido",
    "Hedy", "John", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Sophie", "Tim",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Goldwasser", "Hamilton", "Hopper", "Kernighan",
    "Knuth", "Lamarr", "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Rossum",
    "Shannon", "Thompson", "Torvalds", "Turing", "Wilson", "Wirth",
];
