//! React frontend payloads
//!
//! App root, two pages and a nav bar, in tsx and jsx variants. The app
//! switches views with local state so the scaffold works without any
//! extra routing dependency.

use crate::domain::Language;

/// App root component source
pub fn app_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => APP_TSX,
        Language::Javascript => APP_JSX,
    }
}

/// Home page component source
pub fn home_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => HOME_TSX,
        Language::Javascript => HOME_JSX,
    }
}

/// About page component source
pub fn about_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => ABOUT_TSX,
        Language::Javascript => ABOUT_JSX,
    }
}

/// Navbar component source
pub fn navbar_source(language: Language) -> &'static str {
    match language {
        Language::Typescript => NAVBAR_TSX,
        Language::Javascript => NAVBAR_JSX,
    }
}

const APP_TSX: &str = r#"import React, { useState } from 'react';
import Navbar from './components/Navbar';
import Home from './components/Home';
import About from './components/About';

export type Page = 'home' | 'about';

const App: React.FC = () => {
  const [page, setPage] = useState<Page>('home');

  return (
    <div className="app">
      <Navbar page={page} onNavigate={setPage} />
      <main>{page === 'home' ? <Home /> : <About />}</main>
    </div>
  );
};

export default App;
"#;

const APP_JSX: &str = r#"import React, { useState } from 'react';
import Navbar from './components/Navbar';
import Home from './components/Home';
import About from './components/About';

const App = () => {
  const [page, setPage] = useState('home');

  return (
    <div className="app">
      <Navbar page={page} onNavigate={setPage} />
      <main>{page === 'home' ? <Home /> : <About />}</main>
    </div>
  );
};

export default App;
"#;

const HOME_TSX: &str = r#"import React from 'react';

const Home: React.FC = () => {
  return (
    <section>
      <h1>Welcome</h1>
      <p>This project was scaffolded for you. Start editing to make it yours.</p>
    </section>
  );
};

export default Home;
"#;

const HOME_JSX: &str = r#"import React from 'react';

const Home = () => {
  return (
    <section>
      <h1>Welcome</h1>
      <p>This project was scaffolded for you. Start editing to make it yours.</p>
    </section>
  );
};

export default Home;
"#;

const ABOUT_TSX: &str = r#"import React from 'react';

const About: React.FC = () => {
  return (
    <section>
      <h1>About</h1>
      <p>Describe your project here.</p>
    </section>
  );
};

export default About;
"#;

const ABOUT_JSX: &str = r#"import React from 'react';

const About = () => {
  return (
    <section>
      <h1>About</h1>
      <p>Describe your project here.</p>
    </section>
  );
};

export default About;
"#;

const NAVBAR_TSX: &str = r#"import React from 'react';
import type { Page } from '../App';

interface NavbarProps {
  page: Page;
  onNavigate: (page: Page) => void;
}

const Navbar: React.FC<NavbarProps> = ({ page, onNavigate }) => {
  return (
    <nav>
      <button disabled={page === 'home'} onClick={() => onNavigate('home')}>
        Home
      </button>
      <button disabled={page === 'about'} onClick={() => onNavigate('about')}>
        About
      </button>
    </nav>
  );
};

export default Navbar;
"#;

const NAVBAR_JSX: &str = r#"import React from 'react';

const Navbar = ({ page, onNavigate }) => {
  return (
    <nav>
      <button disabled={page === 'home'} onClick={() => onNavigate('home')}>
        Home
      </button>
      <button disabled={page === 'about'} onClick={() => onNavigate('about')}>
        About
      </button>
    </nav>
  );
};

export default Navbar;
"#;
