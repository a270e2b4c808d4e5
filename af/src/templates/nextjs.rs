//! Next.js frontend payloads (app-router layout)

use crate::domain::Language;

/// Root layout source
pub fn layout_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => LAYOUT_TSX,
        Language::Javascript => LAYOUT_JSX,
    }
}

/// Root page source
pub fn page_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => PAGE_TSX,
        Language::Javascript => PAGE_JSX,
    }
}

/// About page source
pub fn about_page_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => ABOUT_PAGE_TSX,
        Language::Javascript => ABOUT_PAGE_JSX,
    }
}

/// Navbar component source
pub fn navbar_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => NAVBAR_TSX,
        Language::Javascript => NAVBAR_JSX,
    }
}

/// API route source (`/api/hello`)
pub fn api_route_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => API_ROUTE_TS,
        Language::Javascript => API_ROUTE_JS,
    }
}

const LAYOUT_TSX: &str = r#"import React from 'react';
import Navbar from '../components/Navbar';

export const metadata = {
  title: 'Generated App',
  description: 'Scaffolded Next.js application',
};

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en">
      <body>
        <Navbar />
        {children}
      </body>
    </html>
  );
}
"#;

const LAYOUT_JSX: &str = r#"import React from 'react';
import Navbar from '../components/Navbar';

export const metadata = {
  title: 'Generated App',
  description: 'Scaffolded Next.js application',
};

export default function RootLayout({ children }) {
  return (
    <html lang="en">
      <body>
        <Navbar />
        {children}
      </body>
    </html>
  );
}
"#;

const PAGE_TSX: &str = r#"import React from 'react';

export default function Home() {
  return (
    <main>
      <h1>Welcome</h1>
      <p>This project was scaffolded for you. Start editing to make it yours.</p>
    </main>
  );
}
"#;

const PAGE_JSX: &str = r#"import React from 'react';

export default function Home() {
  return (
    <main>
      <h1>Welcome</h1>
      <p>This project was scaffolded for you. Start editing to make it yours.</p>
    </main>
  );
}
"#;

const ABOUT_PAGE_TSX: &str = r#"import React from 'react';

export default function About() {
  return (
    <main>
      <h1>About</h1>
      <p>Describe your project here.</p>
    </main>
  );
}
"#;

const ABOUT_PAGE_JSX: &str = r#"import React from 'react';

export default function About() {
  return (
    <main>
      <h1>About</h1>
      <p>Describe your project here.</p>
    </main>
  );
}
"#;

const NAVBAR_TSX: &str = r#"import React from 'react';
import Link from 'next/link';

const Navbar: React.FC = () => {
  return (
    <nav>
      <Link href="/">Home</Link>
      <Link href="/about">About</Link>
    </nav>
  );
};

export default Navbar;
"#;

const NAVBAR_JSX: &str = r#"import React from 'react';
import Link from 'next/link';

const Navbar = () => {
  return (
    <nav>
      <Link href="/">Home</Link>
      <Link href="/about">About</Link>
    </nav>
  );
};

export default Navbar;
"#;

const API_ROUTE_TS: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  return NextResponse.json({ message: 'Hello from the generated API' });
}
"#;

const API_ROUTE_JS: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  return NextResponse.json({ message: 'Hello from the generated API' });
}
"#;
