use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsestree_parser::{parse, ParseOptions};

// A medium-size TypeScript module touching most declaration forms.
const TYPESCRIPT_SOURCE: &str = r#"
// TypeScript interface definitions
interface User {
    id: number;
    name: string;
    email: string;
    age?: number;
    preferences: UserPreferences;
}

interface UserPreferences {
    theme: 'light' | 'dark';
    notifications: boolean;
    language: string;
}

// Type aliases
type UserID = number;
type UserMap = Map<UserID, User>;

// Class definition
class UserService {
    private users: UserMap;
    private nextId: UserID;

    constructor() {
        this.users = new Map();
        this.nextId = 1;
    }

    createUser(name: string, email: string): User {
        const user: User = {
            id: this.nextId++,
            name,
            email,
            preferences: {
                theme: 'light',
                notifications: true,
                language: 'en'
            }
        };
        this.users.set(user.id, user);
        return user;
    }

    getUserById(id: UserID): User | undefined {
        return this.users.get(id);
    }

    updateUser(id: UserID, updates: Partial<User>): boolean {
        const user = this.users.get(id);
        if (!user) return false;
        this.users.set(id, { ...user, ...updates });
        return true;
    }

    deleteUser(id: UserID): boolean {
        return this.users.delete(id);
    }

    getAllUsers(): User[] {
        return Array.from(this.users.values());
    }
}

// Function with generics
function filterUsers<T extends User>(
    users: T[],
    predicate: (user: T) => boolean
): T[] {
    return users.filter(predicate);
}

// Async function
async function fetchUserData(id: UserID): Promise<User | null> {
    const service = new UserService();
    return service.getUserById(id) || null;
}

// Arrow function with type annotations
const processUsers = (users: User[]): number => {
    return users.reduce((count, user) => {
        if (user.age && user.age > 18) {
            return count + 1;
        }
        return count;
    }, 0);
};

enum Role { Admin = "admin", Member = "member" }

declare namespace Audit {
    function record(event: `user:${"created" | "deleted"}`, id: UserID): void;
}

type Readonlyish<T> = { readonly [K in keyof T]: T[K] extends object ? Readonlyish<T[K]> : T[K] };

/* Regex and template literals */
const EMAIL = /^[^@\s]+@[^@\s]+$/u;
const describe = (user: User) => `${user.name} <${user.email}>`;

// Export statements
export { User, UserService, UserPreferences, Role };
export type { UserID, UserMap };
export default UserService;
"#;

const TSX_SOURCE: &str = r#"
import { useState } from "react";

export function UserList<T extends { id: number; name: string }>({ users }: { users: T[] }) {
    const [selected, setSelected] = useState<number | null>(null);
    return (
        <ul className="users">
            {users.map(user => (
                <li key={user.id} onClick={() => setSelected(user.id)} data-active={selected === user.id}>
                    {user.name} &middot; #{user.id}
                </li>
            ))}
            <>{users.length === 0 && <li>No users</li>}</>
        </ul>
    );
}
"#;

fn bench_parse_typescript(c: &mut Criterion) {
    let options = ParseOptions::module();
    c.bench_function("parse_typescript_medium", |b| {
        b.iter(|| {
            let output = parse(black_box(TYPESCRIPT_SOURCE), &options);
            black_box(output.program);
        });
    });
}

fn bench_parse_with_positions(c: &mut Criterion) {
    let options = ParseOptions {
        range: true,
        loc: true,
        tokens: true,
        comment: true,
        ..ParseOptions::module()
    };
    c.bench_function("parse_typescript_with_positions", |b| {
        b.iter(|| {
            let output = parse(black_box(TYPESCRIPT_SOURCE), &options);
            black_box(output.program);
        });
    });
}

fn bench_parse_tsx(c: &mut Criterion) {
    let options = ParseOptions {
        file_path: Some("list.tsx".to_string()),
        ..ParseOptions::module()
    };
    c.bench_function("parse_tsx_component", |b| {
        b.iter(|| {
            let output = parse(black_box(TSX_SOURCE), &options);
            black_box(output.program);
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let options = ParseOptions {
        range: true,
        ..ParseOptions::module()
    };
    let program = parse(TYPESCRIPT_SOURCE, &options).program;
    c.bench_function("serialize_program_json", |b| {
        b.iter(|| {
            let json = serde_json::to_string(black_box(&program)).unwrap();
            black_box(json);
        });
    });
}

criterion_group!(
    benches,
    bench_parse_typescript,
    bench_parse_with_positions,
    bench_parse_tsx,
    bench_serialize
);
criterion_main!(benches);
