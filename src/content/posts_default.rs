//! The authored post collection. Adding a post means appending one more
//! `Post` here; ids increment from the last entry and are never reused.

use super::{Category, Post};

pub(super) fn default_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Welcome to BoringJava".to_string(),
            category: Category::JavaSe,
            author: "Your Name".to_string(),
            date: "Dec 25, 2024".to_string(),
            read_time: "3 min".to_string(),
            summary: "This is my first blog post on BoringJava. Let's explore \
                      simple, maintainable Java practices together."
                .to_string(),
            content: "Welcome to BoringJava! This blog is dedicated to writing clean, simple, and maintainable Java code.\n\n\
                      The philosophy is simple: boring code is good code. It's predictable, easy to understand, and scales well in enterprise environments.\n\n\
                      In this blog, I'll share tips about:\n\
                      - Modern Java features (Records, Pattern Matching, Virtual Threads)\n\
                      - Design patterns that actually work in production\n\
                      - Spring Boot best practices\n\
                      - System design for real-world applications\n\n\
                      Stay tuned for more posts!"
                .to_string(),
            code_snippet: Some(
                "// The BoringJava way\n\
                 public record BlogPost(\n\
                 \x20   String title,\n\
                 \x20   String content,\n\
                 \x20   LocalDateTime publishedAt\n\
                 ) {}"
                    .to_string(),
            ),
        },
        Post {
            id: "2".to_string(),
            title: "HashMap is Cool".to_string(),
            category: Category::JavaSe,
            author: "Subrat Ojha".to_string(),
            date: "Dec 25, 2024".to_string(),
            read_time: "7 min".to_string(),
            summary: "Deep dive into HashMap - the most commonly used data \
                      structure in Java for storing key-value pairs efficiently."
                .to_string(),
            content: "HashMap is one of the most powerful and commonly used data structures in Java. It's part of the Java Collections Framework and implements the Map interface.\n\n\
                      How HashMap Works Internally:\n\n\
                      HashMap uses an array of \"buckets\" to store entries. When you put a key-value pair:\n\
                      1. The key's hashCode() method is called\n\
                      2. The hash is used to determine which bucket to store the entry\n\
                      3. If multiple keys hash to the same bucket (collision), they're stored as a linked list (or tree in Java 8+)\n\n\
                      Time Complexity:\n\n\
                      \u{2022} get(): O(1) average, O(n) worst case\n\
                      \u{2022} put(): O(1) average, O(n) worst case\n\
                      \u{2022} remove(): O(1) average, O(n) worst case\n\
                      \u{2022} containsKey(): O(1) average\n\n\
                      Key Features:\n\n\
                      \u{2022} Allows null keys and values: Unlike Hashtable, HashMap permits one null key and multiple null values\n\
                      \u{2022} Not synchronized: For thread-safe operations, use ConcurrentHashMap\n\
                      \u{2022} No ordering guarantee: Use LinkedHashMap for insertion order, TreeMap for sorted order\n\
                      \u{2022} Load factor: Default is 0.75 - when 75% full, the map resizes\n\n\
                      Common Use Cases:\n\n\
                      \u{2022} Caching frequently accessed data\n\
                      \u{2022} Counting occurrences (word frequency, etc.)\n\
                      \u{2022} Grouping objects by a property\n\
                      \u{2022} Fast lookups by unique identifier\n\n\
                      Best Practices:\n\n\
                      1. Always override hashCode() when you override equals()\n\
                      2. Use immutable keys (String, Integer) when possible\n\
                      3. Specify initial capacity if you know the size upfront\n\
                      4. Consider ConcurrentHashMap for multi-threaded applications\n\n\
                      HashMap is \"boring\" in the best way - it's reliable, fast, and does exactly what you expect!"
                .to_string(),
            code_snippet: Some(
                "// Creating and using HashMap\n\
                 Map<String, Integer> scores = new HashMap<>();\n\n\
                 // Adding entries\n\
                 scores.put(\"Alice\", 95);\n\
                 scores.put(\"Bob\", 87);\n\
                 scores.put(\"Charlie\", 92);\n\n\
                 // Accessing values\n\
                 int bobScore = scores.get(\"Bob\"); // 87\n\n\
                 // Check if key exists\n\
                 if (scores.containsKey(\"Alice\")) {\n\
                 \x20   System.out.println(\"Alice's score: \" + scores.get(\"Alice\"));\n\
                 }\n\n\
                 // Iterate over entries\n\
                 for (Map.Entry<String, Integer> entry : scores.entrySet()) {\n\
                 \x20   System.out.println(entry.getKey() + \": \" + entry.getValue());\n\
                 }\n\n\
                 // Java 8+ forEach\n\
                 scores.forEach((name, score) ->\n\
                 \x20   System.out.println(name + \" scored \" + score));\n\n\
                 // getOrDefault - avoid null checks\n\
                 int unknownScore = scores.getOrDefault(\"Unknown\", 0);"
                    .to_string(),
            ),
        },
    ]
}
